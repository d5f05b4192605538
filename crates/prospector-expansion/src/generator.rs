use std::future::Future;

use prospector_core::ProspectRecord;

use crate::error::GeneratorError;
use crate::types::GenerationRequest;

/// External service that produces new prospect records for a vertical.
///
/// Calls are slow and costly; the orchestrator makes exactly one attempt per
/// user action.
pub trait ProspectGenerator {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<Vec<ProspectRecord>, GeneratorError>> + Send;
}
