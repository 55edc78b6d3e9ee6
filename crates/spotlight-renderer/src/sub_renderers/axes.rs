//! Axes helper renderer

use spotlight_core::Scene;

use crate::constants::axes::{X_COLOR, Y_COLOR, Z_COLOR};
use crate::context::RenderContext;
use crate::gpu_resources::create_uniform_bind_group;
use crate::pipeline::PipelineConfig;
use crate::traits::SubRenderer;
use crate::vertex::PositionColorVertex;

const VERTEX_COUNT: u32 = 6;

/// Draws the X (red), Y (green) and Z (blue) axes from the origin.
pub struct AxesRenderer {
    enabled: bool,
    visible: bool,
    size: f32,
    pipeline: Option<wgpu::RenderPipeline>,
    vertex_buffer: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,
}

impl AxesRenderer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            visible: false,
            size: 0.0,
            pipeline: None,
            vertex_buffer: None,
            bind_group: None,
        }
    }

    /// Whether the last prepared scene had the helper switched on.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for AxesRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for AxesRenderer {
    fn name(&self) -> &str {
        "axes"
    }

    fn priority(&self) -> i32 {
        super::priorities::AXES
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn on_init(&mut self, ctx: &RenderContext) {
        let bind_group = create_uniform_bind_group(
            ctx.device(),
            ctx.camera_bind_group_layout(),
            ctx.camera_buffer(),
            "Axes Camera Bind Group",
        );

        let pipeline = PipelineConfig::new(
            "Axes",
            include_str!("../shaders/axes.wgsl"),
            ctx.surface_format(),
            ctx.depth_format(),
            &[ctx.camera_bind_group_layout()],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .with_cull_mode(None)
        .build(ctx.device());

        let vertex_buffer = ctx.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("Axes Vertex Buffer"),
            size: (std::mem::size_of::<PositionColorVertex>() * VERTEX_COUNT as usize) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        self.pipeline = Some(pipeline);
        self.vertex_buffer = Some(vertex_buffer);
        self.bind_group = Some(bind_group);
        // Force an upload on the first prepare
        self.size = 0.0;
    }

    fn on_resize(&mut self, _ctx: &RenderContext, _width: u32, _height: u32) {}

    fn prepare(&mut self, ctx: &RenderContext, scene: &Scene) {
        self.visible = scene.axes.visible;
        if !self.visible || scene.axes.size == self.size {
            return;
        }
        let Some(vertex_buffer) = &self.vertex_buffer else {
            return;
        };

        let vertices = generate_axes_vertices(scene.axes.size);
        ctx.write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        self.size = scene.axes.size;
    }

    fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>, _scene: &Scene) {
        if !self.visible {
            return;
        }
        let (Some(pipeline), Some(vertex_buffer), Some(bind_group)) =
            (&self.pipeline, &self.vertex_buffer, &self.bind_group)
        else {
            return;
        };

        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, bind_group, &[]);
        pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        pass.draw(0..VERTEX_COUNT, 0..1);
    }
}

/// Line list for the three axes, each `size` long.
fn generate_axes_vertices(size: f32) -> [PositionColorVertex; VERTEX_COUNT as usize] {
    let line = |end: [f32; 3], color: [f32; 3]| {
        [
            PositionColorVertex {
                position: [0.0, 0.0, 0.0],
                color,
            },
            PositionColorVertex {
                position: end,
                color,
            },
        ]
    };
    let [x0, x1] = line([size, 0.0, 0.0], X_COLOR);
    let [y0, y1] = line([0.0, size, 0.0], Y_COLOR);
    let [z0, z1] = line([0.0, 0.0, size], Z_COLOR);
    [x0, x1, y0, y1, z0, z1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_vertices_scale_with_size() {
        let vertices = generate_axes_vertices(2.0);

        assert_eq!(vertices[1].position, [2.0, 0.0, 0.0]);
        assert_eq!(vertices[3].position, [0.0, 2.0, 0.0]);
        assert_eq!(vertices[5].position, [0.0, 0.0, 2.0]);
        assert_eq!(vertices[0].color, X_COLOR);
        assert_eq!(vertices[2].color, Y_COLOR);
        assert_eq!(vertices[4].color, Z_COLOR);
    }

    #[test]
    fn test_hidden_until_prepared_with_visible_scene() {
        let renderer = AxesRenderer::new();
        assert!(!renderer.is_visible());
        assert_eq!(renderer.name(), "axes");
    }
}
