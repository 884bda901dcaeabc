use super::EditorContext;
use crate::types::{LineKind, MotionKind, Region};

fn normalize_range(
    start: (usize, usize),
    end: (usize, usize),
) -> ((usize, usize), (usize, usize)) {
    if start <= end {
        (start, end)
    } else {
        (end, start)
    }
}

fn line_at<C: EditorContext>(ctx: &C, line: usize) -> String {
    let index = line.saturating_sub(1);
    ctx.lines(index, index + 1)
        .into_iter()
        .next()
        .unwrap_or_default()
}

/// Map the host's marks for `motion` to the lines a toggle works on.
///
/// Mark presence is not checked: a host without a pending motion or
/// selection gets whatever its marks report. When both marks sit on one
/// line the region is the cursor line, so its row always matches the text
/// it carries.
pub fn resolve_region<C: EditorContext>(ctx: &C, motion: MotionKind, line_kind: LineKind) -> Region {
    let (start_mark, end_mark) = motion.marks();
    let ((start_line, start_col), (end_line, end_col)) =
        normalize_range(ctx.mark(start_mark), ctx.mark(end_mark));

    let (start_line, end_line, lines) = if start_line == end_line {
        let (line, _) = ctx.cursor();
        (line, line, vec![ctx.current_line()])
    } else if line_kind == LineKind::Block {
        let lines = vec![line_at(ctx, start_line), line_at(ctx, end_line)];
        (start_line, end_line, lines)
    } else {
        let lines = ctx.lines(start_line.saturating_sub(1), end_line);
        (start_line, end_line, lines)
    };

    log::debug!(
        "resolved {} region {}..={} ({} lines, {})",
        motion.as_str(),
        start_line,
        end_line,
        lines.len(),
        line_kind.as_str()
    );

    Region {
        start_line,
        end_line,
        start_col,
        end_col,
        motion,
        line_kind,
        lines,
    }
}

/// The line under the cursor, ignoring every mark.
pub fn resolve_current_line<C: EditorContext>(ctx: &C, line_kind: LineKind) -> Region {
    let (line, col) = ctx.cursor();
    log::debug!("resolved cursor line {}", line);

    Region {
        start_line: line,
        end_line: line,
        start_col: col,
        end_col: col,
        motion: MotionKind::FromContext,
        line_kind,
        lines: vec![ctx.current_line()],
    }
}
