/// Progress bar shader.
///
/// The vertex stage expands six vertex indices into the bar quad and passes
/// its UV through. The fragment stage is a hard threshold on `fill_ratio`:
/// full alpha left of the fill edge, `unfilled_alpha` right of it.
pub const BAR_SHADER: &str = r#"
struct BarUniforms {
    rect: vec4<f32>,
    color: vec4<f32>,
    fill_ratio: f32,
    filled_alpha: f32,
    unfilled_alpha: f32,
    pad0: f32,
};
@group(0) @binding(0) var<uniform> bar: BarUniforms;

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> VertexOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(0.0, 0.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(0.0, 1.0),
        vec2<f32>(0.0, 1.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(1.0, 1.0),
    );
    let uv = corners[index];

    var out: VertexOutput;
    out.position = vec4<f32>(mix(bar.rect.xy, bar.rect.zw, uv), 0.0, 1.0);
    out.uv = uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let alpha = select(bar.unfilled_alpha, bar.filled_alpha, in.uv.x < bar.fill_ratio);
    return vec4<f32>(bar.color.rgb, alpha);
}
"#;

/// Vertices per bar draw (two triangles).
pub const BAR_VERTEX_COUNT: u32 = 6;
