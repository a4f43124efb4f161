// Renders every procedural shape side by side into the off-screen target
// and writes the result to `shapes.png`.
//
//     RUST_LOG=debug cargo run -p tessel_renderer --example shapes

use tessel_renderer::glam::{Mat4, Vec3};
use tessel_renderer::{Color, FramePacket, Renderer};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 512;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    pollster::block_on(async {
        let mut renderer = Renderer::headless(WIDTH, HEIGHT).await?;

        let mut meshes = Vec::new();
        let mut mesh = renderer.new_mesh();
        mesh.generate_cube(&renderer.context, 1.0, Color::RED);
        meshes.push(mesh);

        let mut mesh = renderer.new_mesh();
        mesh.generate_cuboid(&renderer.context, Vec3::new(0.6, 1.2, 0.8), Color::YELLOW);
        meshes.push(mesh);

        let mut mesh = renderer.new_mesh();
        mesh.generate_cone(&renderer.context, 0.6, 1.2, 12, Color::GREEN);
        meshes.push(mesh);

        let mut mesh = renderer.new_mesh();
        mesh.generate_cylinder(&renderer.context, 0.5, 1.2, 16, Color::CYAN);
        meshes.push(mesh);

        let mut mesh = renderer.new_mesh();
        mesh.generate_tube(&renderer.context, 0.6, 0.35, 1.0, 16, Color::BLUE);
        meshes.push(mesh);

        let mut mesh = renderer.new_mesh();
        mesh.generate_torus(&renderer.context, 0.7, 0.35, 24, 12, Color::rgb(1.0, 0.5, 0.0));
        meshes.push(mesh);

        let mut mesh = renderer.new_mesh();
        mesh.generate_sphere(&renderer.context, 0.6, 6, Color::WHITE);
        meshes.push(mesh);

        let projection = Mat4::perspective_rh(
            45f32.to_radians(),
            WIDTH as f32 / HEIGHT as f32,
            0.1,
            100.0,
        );
        let view = Mat4::look_at_rh(Vec3::new(0.0, 2.5, 9.0), Vec3::ZERO, Vec3::Y);

        let mut packet = FramePacket::new();
        let spacing = 1.6;
        let first = -spacing * (meshes.len() as f32 - 1.0) * 0.5;
        for (i, mesh) in meshes.iter().enumerate() {
            let model = Mat4::from_translation(Vec3::new(first + spacing * i as f32, 0.0, 0.0))
                * Mat4::from_rotation_y(0.6)
                * Mat4::from_rotation_x(0.3);
            mesh.render(projection, view, model, &mut packet)?;
        }

        let mut encoder = renderer.begin_frame();
        renderer.render_to_target(&mut encoder, &packet);
        renderer.submit(encoder);

        let pixels = renderer.read_pixels()?;
        image::save_buffer("shapes.png", &pixels, WIDTH, HEIGHT, image::ColorType::Rgba8)?;

        let vertices: u32 = meshes.iter().map(|m| m.vertex_count()).sum();
        log::info!("{} meshes, {vertices} vertices, {} draws", meshes.len(), packet.len());
        println!("wrote shapes.png");
        Ok::<(), anyhow::Error>(())
    })
}
