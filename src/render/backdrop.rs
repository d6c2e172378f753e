use super::helpers;
use crate::core::texture::RgbaImage;
use crate::core::{linear_rgb, BACKDROP_STOPS};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BackdropUniforms {
    pub(crate) stops: [[f32; 4]; 3],
}

impl BackdropUniforms {
    pub(crate) fn from_stops() -> Self {
        let mut stops = [[0.0; 4]; 3];
        for (dst, (hex, pos)) in stops.iter_mut().zip(BACKDROP_STOPS) {
            let [r, g, b] = linear_rgb(hex);
            *dst = [r, g, b, pos];
        }
        Self { stops }
    }
}

pub(crate) struct BackdropResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) bind_group: wgpu::BindGroup,
    _star_texture: wgpu::Texture,
}

pub(crate) fn create_backdrop_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    stars: &RgbaImage,
) -> BackdropResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("backdrop_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::BACKDROP_WGSL.into()),
    });
    let [tex_entry, sampler_entry] = helpers::texture_entries(1);
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("backdrop_bgl"),
        entries: &[
            helpers::uniform_entry(0, wgpu::ShaderStages::FRAGMENT),
            tex_entry,
            sampler_entry,
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("backdrop_pl"),
        bind_group_layouts: &[globals_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("backdrop_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_fullscreen"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(helpers::depth_state(false, wgpu::CompareFunction::Always)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_backdrop"),
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

    let uniform_buffer = helpers::uniform_buffer::<BackdropUniforms>(device, "backdrop_uniforms");
    queue.write_buffer(
        &uniform_buffer,
        0,
        bytemuck::bytes_of(&BackdropUniforms::from_stops()),
    );
    let (star_texture, star_view) = helpers::upload_rgba(device, queue, "star_tex", stars);
    let sampler = helpers::create_sampler(device, "star_sampler", wgpu::AddressMode::Repeat);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("backdrop_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&star_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });

    BackdropResources {
        pipeline,
        bind_group,
        _star_texture: star_texture,
    }
}
