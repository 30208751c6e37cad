use crate::domain::classification::pipeline::ClassificationPipeline;

/// Container wiring the scan ports together; the service traits are implemented on it.
#[derive(Clone)]
pub struct Service<PL, LLM, SH> {
    pub(crate) product_lookup: PL,
    pub(crate) pipeline: ClassificationPipeline<LLM>,
    pub(crate) scan_history: SH,
}

impl<PL, LLM, SH> Service<PL, LLM, SH> {
    pub fn new(product_lookup: PL, pipeline: ClassificationPipeline<LLM>, scan_history: SH) -> Self {
        Self {
            product_lookup,
            pipeline,
            scan_history,
        }
    }
}
