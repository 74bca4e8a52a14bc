use super::*;

/// Brackets for every finalized phase, in model order.
///
/// The horizontal extent covers the lowest and highest actor ordinal touched
/// by the phase's actions; nested phases are pulled inward by their depth so
/// outlines sharing a lane or a row stay apart.
pub(super) fn compute_phase_layouts(
    seq: &Sequence,
    theme: &Theme,
    config: &LayoutConfig,
) -> Vec<PhaseLayout> {
    let mut phases = Vec::with_capacity(seq.phases.len());
    for phase in &seq.phases {
        let Some((min_ordinal, max_ordinal)) = seq.phase_span(phase) else {
            warn!(name = %phase.name, at = phase.start, "phase has no actions, skipping");
            continue;
        };
        let nest = phase.depth as f32 * config.phase_nest_inset;

        let left = column_x(min_ordinal, config) - config.phase_pad_x + nest;
        let right = column_x(max_ordinal, config) + config.phase_pad_x - nest;
        let width = (right - left).max(config.dot_radius * 4.0);

        let band_top = config.origin_y + (phase.start as f32 + 0.25) * config.row_height;
        let band_bottom = config.origin_y + (phase.end as f32 + 0.25) * config.row_height;
        let top = band_top + config.phase_inset_y + nest;
        let bottom = band_bottom - config.phase_inset_y - nest;
        let height = (bottom - top).max(config.row_height * 0.25);

        phases.push(PhaseLayout {
            name: phase.name.clone(),
            color: phase
                .color
                .clone()
                .unwrap_or_else(|| theme.phase_color.clone()),
            start: phase.start,
            end: phase.end,
            depth: phase.depth,
            min_ordinal,
            max_ordinal,
            x: left,
            y: top,
            width,
            height,
            label_x: left + config.phase_label_offset,
            label_y: top + height / 2.0,
        });
    }
    phases
}
