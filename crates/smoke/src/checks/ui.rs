#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiReport {
    pub shape_count: usize,
    pub primitive_count: usize,
    pub texture_uploads: usize,
}

/// Runs one headless frame with a single label and tessellates the result.
pub fn run_ui_frame() -> UiReport {
    let ctx = egui::Context::default();
    let output = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Arcantha");
            ui.label("ui smoke check");
        });
    });

    let shape_count = output.shapes.len();
    let texture_uploads = output.textures_delta.set.len();
    let primitives = ctx.tessellate(output.shapes, output.pixels_per_point);

    UiReport {
        shape_count,
        primitive_count: primitives.len(),
        texture_uploads,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_uploads_font_atlas_and_emits_shapes() {
        let report = run_ui_frame();

        assert!(report.texture_uploads > 0);
        assert!(report.shape_count > 0);
    }
}
