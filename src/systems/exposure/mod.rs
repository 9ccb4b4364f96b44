mod estimator;
mod isolation;
#[cfg(test)]
pub(crate) mod test_scene;

pub use estimator::{
    estimate_exposure, exposure_system, ExposureProbe, ExposureReport, ExposureSample,
};
pub use isolation::IsolationGuard;
