use super::helpers;
use super::meshes::{vertex_layout, GpuMesh};
use crate::core::mesh::plane;
use crate::core::texture::RgbaImage;
use crate::core::LOGO_PLANE_SIZE;
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LogoUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
}

/// Textured hub plane shown while the logo model streams in. Starts on a
/// procedural placeholder and swaps in the decoded image once it arrives.
pub(crate) struct LogoResources {
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    mesh: GpuMesh,
    uniform_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

pub(crate) fn create_logo_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    placeholder: &RgbaImage,
) -> LogoResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("logo_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::LOGO_WGSL.into()),
    });
    let [tex_entry, sampler_entry] = helpers::texture_entries(1);
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("logo_bgl"),
        entries: &[
            helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT),
            tex_entry,
            sampler_entry,
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("logo_pl"),
        bind_group_layouts: &[globals_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("logo_pipeline"),
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
        depth_stencil: Some(helpers::depth_state(false, wgpu::CompareFunction::Less)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let plane_mesh = plane(LOGO_PLANE_SIZE, LOGO_PLANE_SIZE);
    let mesh = GpuMesh::upload(device, "logo_plane", &plane_mesh);
    let uniform_buffer = helpers::uniform_buffer::<LogoUniforms>(device, "logo_uniforms");
    let sampler =
        helpers::create_sampler(device, "logo_sampler", wgpu::AddressMode::ClampToEdge);
    let (texture, view) = helpers::upload_rgba(device, queue, "logo_placeholder", placeholder);
    let bind_group = make_bind_group(device, &bgl, &uniform_buffer, &view, &sampler);

    LogoResources {
        pipeline,
        bgl,
        mesh,
        uniform_buffer,
        sampler,
        _texture: texture,
        bind_group,
    }
}

fn make_bind_group(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    uniform_buffer: &wgpu::Buffer,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("logo_bg"),
        layout: bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

impl LogoResources {
    pub(crate) fn set_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
    ) {
        let (texture, view) = helpers::upload_rgba(device, queue, "logo_tex", image);
        self.bind_group =
            make_bind_group(device, &self.bgl, &self.uniform_buffer, &view, &self.sampler);
        self._texture = texture;
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, model: Mat4, emissive_intensity: f32) {
        let u = LogoUniforms {
            model: model.to_cols_array_2d(),
            tint: [1.0, 1.0, 1.0, emissive_intensity],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw<'p>(&self, rpass: &mut wgpu::RenderPass<'p>, globals_bg: &wgpu::BindGroup) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, globals_bg, &[]);
        rpass.set_bind_group(1, &self.bind_group, &[]);
        self.mesh.draw(rpass);
    }
}
