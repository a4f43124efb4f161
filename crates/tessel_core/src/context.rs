use std::sync::Arc;

use anyhow::Context as _;
use thiserror::Error;

/// Owns the wgpu objects shared by every mesh upload and render pass.
///
/// `Device` and `Queue` are `Arc`-wrapped so passes and resources can hold
/// cheap clones. All device work still happens on the thread that owns the
/// context.
pub struct EngineContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("no suitable graphics adapter was found")]
    AdapterUnavailable,
    #[error("device request failed: {0}")]
    DeviceRequest(String),
}

impl EngineContext {
    /// Features the wireframe overlay wants. Requested only when the adapter
    /// exposes them; the renderer skips the overlay otherwise.
    pub const OPTIONAL_FEATURES: wgpu::Features = wgpu::Features::POLYGON_MODE_LINE;

    /// Creates a headless `EngineContext` (no surface), used for off-screen
    /// rendering and tests.
    pub async fn new() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context(ContextError::AdapterUnavailable)?;

        let info = adapter.get_info();
        log::info!("selected adapter: {} ({:?})", info.name, info.backend);

        let required_features = adapter.features() & Self::OPTIONAL_FEATURES;
        if !required_features.contains(wgpu::Features::POLYGON_MODE_LINE) {
            log::warn!("adapter lacks POLYGON_MODE_LINE; wireframe overlays will be skipped");
        }

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Tessel Device"),
                    required_features,
                    required_limits: wgpu::Limits::default(),
                    ..Default::default()
                },
                None,
            )
            .await
            .map_err(|e| ContextError::DeviceRequest(e.to_string()))?;

        Ok(Self {
            instance,
            adapter,
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }
}
