use candle_core::Device;
use tracing::debug;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

use super::error::SemanticError;

/// Selects the compute device based on enabled features, falling back to CPU.
///
/// GPU probing never fails the caller: an unavailable Metal/CUDA device is
/// logged and the CPU is used instead.
pub fn select_device() -> Result<Device, SemanticError> {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Using Metal GPU acceleration");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Using CUDA GPU acceleration");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable"),
    }

    debug!("Using CPU device");
    Ok(Device::Cpu)
}
