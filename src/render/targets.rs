use super::helpers;

/// Multisampled colour target resolved into the swapchain image.
///
/// With a sample count of 1 there is no target and passes draw straight into
/// the surface texture.
pub(crate) struct MsaaTarget {
    samples: u32,
    _texture: Option<wgpu::Texture>,
    view: Option<wgpu::TextureView>,
}

impl MsaaTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        samples: u32,
    ) -> Self {
        let mut target = Self {
            samples,
            _texture: None,
            view: None,
        };
        target.recreate(device, format, width, height);
        target
    }

    pub(crate) fn samples(&self) -> u32 {
        self.samples
    }

    pub(crate) fn view(&self) -> Option<&wgpu::TextureView> {
        self.view.as_ref()
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) {
        if self.samples <= 1 {
            self._texture = None;
            self.view = None;
            return;
        }
        let (texture, view) = helpers::create_color_texture(
            device,
            "msaa_color",
            width.max(1),
            height.max(1),
            format,
            self.samples,
        );
        self._texture = Some(texture);
        self.view = Some(view);
    }
}
