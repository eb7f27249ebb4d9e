//! Verification oracle - scores uploaded proofs.
//!
//! The oracle is an external collaborator behind a trait so the simulated
//! default can be swapped for a real AI or manual review service. Only the
//! shape of the contract is stable: a proof goes in, a verdict and a score
//! in `0..=100` come out.

use async_trait::async_trait;
use rand::Rng;

use crate::entities::ProofKind;
use crate::errors::Result;

/// Score above which a proof counts as verified.
pub const VERIFICATION_THRESHOLD: i32 = 85;

/// The proof fields the oracle inspects.
#[derive(Debug, Clone)]
pub struct ProofInput {
    /// Evidence type
    pub kind: ProofKind,
    /// What the artifact claims to show
    pub description: String,
}

/// Verdict returned by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationResult {
    /// Whether the proof passed verification
    pub verified: bool,
    /// Confidence score in `0..=100`
    pub score: i32,
}

/// A service that can verify proof artifacts.
#[async_trait]
pub trait VerificationOracle: Send + Sync {
    /// Scores the given proof and returns a verdict.
    ///
    /// # Errors
    /// Returns an error if the underlying service fails. The simulated
    /// oracle never fails.
    async fn verify(&self, input: &ProofInput) -> Result<VerificationResult>;
}

/// Placeholder oracle used until a real verification service exists.
///
/// Scores uniformly in `80..=100` and verifies anything above
/// [`VERIFICATION_THRESHOLD`], regardless of the proof contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedOracle;

#[async_trait]
impl VerificationOracle for SimulatedOracle {
    async fn verify(&self, _input: &ProofInput) -> Result<VerificationResult> {
        let score = rand::thread_rng().gen_range(80..=100);
        Ok(VerificationResult {
            verified: score > VERIFICATION_THRESHOLD,
            score,
        })
    }
}
