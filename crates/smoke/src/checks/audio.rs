use cpal::traits::{DeviceTrait, HostTrait};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioReport {
    pub host: String,
    pub device: String,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Opens the default output device and reads its default config. No stream is
/// built; the device is released on return.
pub fn open_default_output() -> Result<AudioReport, String> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| "audio: no default output device available".to_string())?;
    let config = device
        .default_output_config()
        .map_err(|error| format!("audio: failed to query output config: {error}"))?;

    #[allow(deprecated)]
    let device_name = device.name().unwrap_or_else(|_| "<unnamed>".to_string());

    Ok(AudioReport {
        host: format!("{:?}", host.id()),
        device: device_name,
        sample_rate: config.sample_rate(),
        channels: config.channels(),
    })
}
