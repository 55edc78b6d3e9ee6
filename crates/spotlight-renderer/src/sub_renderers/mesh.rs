//! Lit mesh renderer with spotlight shadow maps

use spotlight_core::{Geometry, Mesh, Scene};
use wgpu::util::DeviceExt;

use crate::constants::lighting::MAX_SPOT_LIGHTS;
use crate::constants::shadow::SHADOW_MAP_FORMAT;
use crate::context::RenderContext;
use crate::geometry::MeshData;
use crate::gpu_resources::{
    ShadowMaps, create_light_bind_group, create_light_bind_group_layout,
    create_material_bind_group_layout, create_shadow_light_bind_group_layout,
    create_shadow_maps, create_shadow_sampler, create_uniform_bind_group,
};
use crate::light::LightsUniform;
use crate::material::MaterialUniform;
use crate::pipeline::PipelineConfig;
use crate::traits::{PassType, SubRenderer};
use crate::vertex::{MeshInstance, MeshVertex};

/// Instances of one geometry, split by whether they cast shadows.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceBatch {
    pub geometry: Geometry,
    pub instances: Vec<MeshInstance>,
    pub casters: Vec<MeshInstance>,
}

/// Group meshes by geometry, keeping first-seen order.
pub fn batch_meshes<'a>(meshes: impl IntoIterator<Item = &'a Mesh>) -> Vec<InstanceBatch> {
    let mut batches: Vec<InstanceBatch> = Vec::new();
    for mesh in meshes {
        let instance = MeshInstance::from(mesh);
        let index = match batches.iter().position(|b| b.geometry == mesh.geometry) {
            Some(index) => index,
            None => {
                batches.push(InstanceBatch {
                    geometry: mesh.geometry,
                    instances: Vec::new(),
                    casters: Vec::new(),
                });
                batches.len() - 1
            }
        };
        let batch = &mut batches[index];
        if instance.casts_shadow() {
            batch.casters.push(instance);
        }
        batch.instances.push(instance);
    }
    batches
}

/// Uploaded geometry plus its per-frame instance buffers.
struct GpuMesh {
    geometry: Geometry,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: InstanceBuffer,
    caster_buffer: InstanceBuffer,
}

struct InstanceBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
    count: u32,
}

impl InstanceBuffer {
    fn new(device: &wgpu::Device, label: &str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (std::mem::size_of::<MeshInstance>() * capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            capacity,
            count: 0,
        }
    }

    fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, label: &str, data: &[MeshInstance]) {
        if data.len() > self.capacity {
            *self = Self::new(device, label, data.len().next_power_of_two());
        }
        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.count = data.len() as u32;
    }
}

impl GpuMesh {
    fn new(device: &wgpu::Device, geometry: Geometry) -> Self {
        let data = MeshData::from_geometry(&geometry);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        tracing::debug!(
            "Uploaded {:?}: {} vertices, {} triangles",
            geometry,
            data.vertices.len(),
            data.triangle_count()
        );

        Self {
            geometry,
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
            instance_buffer: InstanceBuffer::new(device, "Mesh Instance Buffer", 4),
            caster_buffer: InstanceBuffer::new(device, "Mesh Caster Buffer", 4),
        }
    }

    fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>, instances: &'a InstanceBuffer) {
        if instances.count == 0 {
            return;
        }
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, instances.buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..instances.count);
    }
}

/// GPU state created in `on_init`.
struct MeshGpu {
    pipeline: wgpu::RenderPipeline,
    shadow_pipeline: wgpu::RenderPipeline,
    camera_bind_group: wgpu::BindGroup,
    light_layout: wgpu::BindGroupLayout,
    light_buffer: wgpu::Buffer,
    light_bind_group: wgpu::BindGroup,
    material_buffer: wgpu::Buffer,
    material_bind_group: wgpu::BindGroup,
    shadow_sampler: wgpu::Sampler,
    shadow_maps: ShadowMaps,
    shadow_light_buffers: Vec<wgpu::Buffer>,
    shadow_light_bind_groups: Vec<wgpu::BindGroup>,
    meshes: Vec<GpuMesh>,
}

/// Draws the planes and cylinders lit by the spotlights.
pub struct MeshRenderer {
    enabled: bool,
    gpu: Option<MeshGpu>,
    lights: LightsUniform,
    shadow_casting: [bool; MAX_SPOT_LIGHTS],
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            gpu: None,
            lights: LightsUniform::default(),
            shadow_casting: [false; MAX_SPOT_LIGHTS],
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.gpu.is_some()
    }

    /// Record one depth pass per spotlight into its shadow map layer.
    pub fn render_shadows(&self, encoder: &mut wgpu::CommandEncoder) {
        let Some(gpu) = &self.gpu else {
            return;
        };

        for (index, layer_view) in gpu.shadow_maps.layer_views.iter().enumerate() {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shadow Pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: layer_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !self.shadow_casting[index] {
                continue;
            }

            pass.set_pipeline(&gpu.shadow_pipeline);
            pass.set_bind_group(0, &gpu.shadow_light_bind_groups[index], &[]);
            for mesh in &gpu.meshes {
                mesh.draw(&mut pass, &mesh.caster_buffer);
            }
        }
    }

    fn ensure_shadow_maps(gpu: &mut MeshGpu, device: &wgpu::Device, scene: &Scene) {
        let requested = scene
            .lights
            .iter()
            .map(|light| light.shadow_map_size)
            .max()
            .unwrap_or(0);
        let wanted = crate::gpu_resources::shadow_map_size(
            requested,
            device.limits().max_texture_dimension_2d,
        );
        if wanted == gpu.shadow_maps.size {
            return;
        }

        tracing::debug!("Recreating shadow maps at {wanted}x{wanted}");
        gpu.shadow_maps = create_shadow_maps(device, wanted);
        gpu.light_bind_group = create_light_bind_group(
            device,
            &gpu.light_layout,
            &gpu.light_buffer,
            &gpu.shadow_maps.array_view,
            &gpu.shadow_sampler,
        );
    }
}

impl Default for MeshRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for MeshRenderer {
    fn name(&self) -> &str {
        "mesh"
    }

    fn priority(&self) -> i32 {
        super::priorities::MESH
    }

    fn pass_type(&self) -> PassType {
        PassType::Opaque
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn on_init(&mut self, ctx: &RenderContext) {
        let device = ctx.device();

        let light_layout = create_light_bind_group_layout(device);
        let material_layout = create_material_bind_group_layout(device);
        let shadow_light_layout = create_shadow_light_bind_group_layout(device);

        let pipeline = PipelineConfig::new(
            "Mesh",
            include_str!("../shaders/mesh.wgsl"),
            ctx.surface_format(),
            ctx.depth_format(),
            &[ctx.camera_bind_group_layout(), &light_layout, &material_layout],
        )
        .with_vertex_layouts(vec![MeshVertex::layout(), MeshInstance::layout()])
        .build(device);

        let shadow_pipeline = PipelineConfig::depth_only(
            "Shadow",
            include_str!("../shaders/shadow.wgsl"),
            SHADOW_MAP_FORMAT,
            &[&shadow_light_layout],
        )
        .with_vertex_layouts(vec![MeshVertex::layout(), MeshInstance::layout()])
        .with_cull_mode(None)
        .build(device);

        let camera_bind_group = create_uniform_bind_group(
            device,
            ctx.camera_bind_group_layout(),
            ctx.camera_buffer(),
            "Mesh Camera Bind Group",
        );

        let light_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lights Buffer"),
            contents: bytemuck::cast_slice(&[self.lights]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let shadow_sampler = create_shadow_sampler(device);
        let shadow_maps = create_shadow_maps(device, spotlight_core::LightConfig::default().shadow_map_size);
        let light_bind_group = create_light_bind_group(
            device,
            &light_layout,
            &light_buffer,
            &shadow_maps.array_view,
            &shadow_sampler,
        );

        let material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Material Buffer"),
            contents: bytemuck::cast_slice(&[MaterialUniform::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let material_bind_group = create_uniform_bind_group(
            device,
            &material_layout,
            &material_buffer,
            "Material Bind Group",
        );

        let (shadow_light_buffers, shadow_light_bind_groups): (Vec<_>, Vec<_>) = (0
            ..MAX_SPOT_LIGHTS)
            .map(|_| {
                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Shadow Light Buffer"),
                    contents: bytemuck::cast_slice(&glam::Mat4::IDENTITY.to_cols_array_2d()),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let bind_group = create_uniform_bind_group(
                    device,
                    &shadow_light_layout,
                    &buffer,
                    "Shadow Light Bind Group",
                );
                (buffer, bind_group)
            })
            .unzip();

        self.gpu = Some(MeshGpu {
            pipeline,
            shadow_pipeline,
            camera_bind_group,
            light_layout,
            light_buffer,
            light_bind_group,
            material_buffer,
            material_bind_group,
            shadow_sampler,
            shadow_maps,
            shadow_light_buffers,
            shadow_light_bind_groups,
            meshes: Vec::new(),
        });
    }

    fn on_resize(&mut self, _ctx: &RenderContext, _width: u32, _height: u32) {
        // Mesh renderer draws into whatever target the frame provides
    }

    fn prepare(&mut self, ctx: &RenderContext, scene: &Scene) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        let device = ctx.device();
        let queue = ctx.queue();

        Self::ensure_shadow_maps(gpu, device, scene);

        self.lights = LightsUniform::from_scene(scene);
        ctx.write_buffer(&gpu.light_buffer, 0, bytemuck::cast_slice(&[self.lights]));

        for (index, buffer) in gpu.shadow_light_buffers.iter().enumerate() {
            let view_proj = self.lights.shadow_view_proj(index);
            self.shadow_casting[index] = view_proj.is_some()
                && scene.lights.get(index).is_some_and(|light| light.cast_shadow);
            if let Some(view_proj) = view_proj {
                ctx.write_buffer(buffer, 0, bytemuck::cast_slice(&view_proj));
            }
        }

        let material = MaterialUniform::from(&scene.material);
        ctx.write_buffer(&gpu.material_buffer, 0, bytemuck::cast_slice(&[material]));

        let batches = batch_meshes(scene.meshes());
        gpu.meshes
            .retain(|mesh| batches.iter().any(|b| b.geometry == mesh.geometry));
        for batch in &batches {
            let mesh = match gpu.meshes.iter().position(|m| m.geometry == batch.geometry) {
                Some(index) => &mut gpu.meshes[index],
                None => {
                    gpu.meshes.push(GpuMesh::new(device, batch.geometry));
                    let last = gpu.meshes.len() - 1;
                    &mut gpu.meshes[last]
                }
            };
            mesh.instance_buffer
                .write(device, queue, "Mesh Instance Buffer", &batch.instances);
            mesh.caster_buffer
                .write(device, queue, "Mesh Caster Buffer", &batch.casters);
        }
    }

    fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>, _scene: &Scene) {
        let Some(gpu) = &self.gpu else {
            return;
        };

        pass.set_pipeline(&gpu.pipeline);
        pass.set_bind_group(0, &gpu.camera_bind_group, &[]);
        pass.set_bind_group(1, &gpu.light_bind_group, &[]);
        pass.set_bind_group(2, &gpu.material_bind_group, &[]);
        for mesh in &gpu.meshes {
            mesh.draw(pass, &mesh.instance_buffer);
        }
    }
}
