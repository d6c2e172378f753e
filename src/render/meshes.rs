use super::helpers;
use crate::core::mesh::{MeshData, Primitive, Vertex};
use crate::core::Material;
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) base_color: [f32; 4],
    pub(crate) emissive: [f32; 4],
    pub(crate) params: [f32; 4],
}

impl ObjectUniforms {
    pub(crate) fn new(model: Mat4, m: &Material) -> Self {
        let [r, g, b] = m.base_color;
        let [er, eg, eb] = m.emissive;
        Self {
            model: model.to_cols_array_2d(),
            base_color: [r, g, b, m.roughness],
            emissive: [er, eg, eb, m.emissive_intensity],
            params: [m.metalness, 0.0, 0.0, 0.0],
        }
    }
}

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl GpuMesh {
    pub(crate) fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    pub(crate) fn draw<'p>(&self, rpass: &mut wgpu::RenderPass<'p>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

pub(crate) const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

/// One episode object: its geometry plus its own uniform buffer.
pub(crate) struct ObjectSlot {
    mesh: GpuMesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ObjectSlot {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        mesh: &MeshData,
    ) -> Self {
        let uniform_buffer = helpers::uniform_buffer::<ObjectUniforms>(device, label);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            mesh: GpuMesh::upload(device, label, mesh),
            uniform_buffer,
            bind_group,
        }
    }

    fn draw<'p>(&self, rpass: &mut wgpu::RenderPass<'p>) {
        rpass.set_bind_group(1, &self.bind_group, &[]);
        self.mesh.draw(rpass);
    }
}

/// Lit geometry: one slot per episode plus the hub logo mesh once it has loaded.
pub(crate) struct MeshResources {
    pipeline: wgpu::RenderPipeline,
    object_bgl: wgpu::BindGroupLayout,
    slots: Vec<ObjectSlot>,
    logo: Option<ObjectSlot>,
}

pub(crate) fn create_mesh_resources(
    device: &wgpu::Device,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    primitives: &[Primitive],
) -> MeshResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("object_bgl"),
        entries: &[helpers::uniform_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[globals_bgl, &object_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state(true, wgpu::CompareFunction::Less)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let slots = primitives
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let label = format!("episode_{}", i);
            ObjectSlot::new(device, &object_bgl, &label, &p.build())
        })
        .collect();

    MeshResources {
        pipeline,
        object_bgl,
        slots,
        logo: None,
    }
}

impl MeshResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, index: usize, uniforms: &ObjectUniforms) {
        if let Some(slot) = self.slots.get(index) {
            queue.write_buffer(&slot.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        }
    }

    pub(crate) fn set_logo(&mut self, device: &wgpu::Device, mesh: &MeshData) {
        self.logo = Some(ObjectSlot::new(device, &self.object_bgl, "logo_mesh", mesh));
    }

    #[inline]
    pub(crate) fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    pub(crate) fn write_logo(&self, queue: &wgpu::Queue, uniforms: &ObjectUniforms) {
        if let Some(slot) = &self.logo {
            queue.write_buffer(&slot.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        }
    }

    pub(crate) fn draw<'p>(
        &self,
        rpass: &mut wgpu::RenderPass<'p>,
        globals_bg: &wgpu::BindGroup,
        count: usize,
    ) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, globals_bg, &[]);
        for slot in self.slots.iter().take(count).chain(self.logo.as_ref()) {
            slot.draw(rpass);
        }
    }
}
