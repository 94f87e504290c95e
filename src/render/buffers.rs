use super::uniforms::ObjectUniforms;
use glam::Vec3;
use wgpu::util::DeviceExt;

/// Indexed geometry on the GPU. Dynamic meshes keep a writable vertex buffer.
pub(crate) struct GpuMesh {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl GpuMesh {
    pub(crate) fn new(
        device: &wgpu::Device,
        label: &str,
        positions: &[Vec3],
        indices: &[u32],
        dynamic: bool,
    ) -> Self {
        let mut usage = wgpu::BufferUsages::VERTEX;
        if dynamic {
            usage |= wgpu::BufferUsages::COPY_DST;
        }
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(positions),
            usage,
        });
        let indices_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices: indices_buf,
            index_count: indices.len() as u32,
        }
    }

    pub(crate) fn write_vertices(&self, queue: &wgpu::Queue, positions: &[Vec3]) {
        queue.write_buffer(&self.vertices, 0, bytemuck::cast_slice(positions));
    }
}

/// Instanced sprite centres.
pub(crate) struct GpuPoints {
    pub(crate) instances: wgpu::Buffer,
    pub(crate) count: u32,
}

impl GpuPoints {
    pub(crate) fn new(device: &wgpu::Device, label: &str, positions: &[Vec3]) -> Self {
        let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(positions),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            instances,
            count: positions.len() as u32,
        }
    }

    pub(crate) fn write(&mut self, queue: &wgpu::Queue, positions: &[Vec3]) {
        let n = positions.len().min(self.count as usize);
        queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&positions[..n]));
    }
}

/// Per-object uniform buffer with its bind group.
pub(crate) struct ObjectSlot {
    buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl ObjectSlot {
    pub(crate) fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &ObjectUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}
