use anyhow::{Context, Result};
use regex::Regex;

use super::hooks::{Hooks, ignore_line, is_fn, settle};
use crate::atoms::text;
use crate::molecules::comment::{
    CommentMatcher, close_block, comment_line, comment_span, open_block, unclose_block,
    uncomment_line, unopen_block,
};
use crate::molecules::region::{EditorContext, resolve_current_line, resolve_region};
use crate::types::{
    CommentDescriptor, LineKind, MotionKind, Region, ToggleAction, ToggleConfig, ToggleEdit,
};

/// Decides the toggle direction for a region and produces its replacement lines.
#[derive(Debug)]
pub struct Toggler {
    config: ToggleConfig,
    ignore: Option<Regex>,
    hooks: Hooks,
}

/// A line comment syntax has nothing to close a block with.
fn effective_kind(descriptor: &CommentDescriptor, line_kind: LineKind) -> LineKind {
    if descriptor.is_line() {
        LineKind::Line
    } else {
        line_kind
    }
}

impl Toggler {
    pub fn new(config: ToggleConfig) -> Result<Self> {
        let ignore = config
            .ignore
            .as_deref()
            .map(Regex::new)
            .transpose()
            .with_context(|| format!("Invalid ignore pattern: {:?}", config.ignore))?;

        Ok(Self {
            config,
            ignore,
            hooks: Hooks::default(),
        })
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Toggle the line under the cursor (`gcc`). Marks are not read.
    pub fn toggle_current_line<C: EditorContext>(
        &self,
        ctx: &C,
        descriptor: &CommentDescriptor,
    ) -> Option<ToggleEdit> {
        self.run(
            ctx,
            descriptor,
            MotionKind::FromContext,
            LineKind::Line,
            |kind| resolve_current_line(ctx, kind),
        )
    }

    /// Resolve the region for `motion` and comment or uncomment it.
    ///
    /// Returns `None` only when no matcher can be built for the descriptor;
    /// the host is told through [`EditorContext::notify_error`].
    pub fn toggle<C: EditorContext>(
        &self,
        ctx: &C,
        descriptor: &CommentDescriptor,
        motion: MotionKind,
        line_kind: LineKind,
    ) -> Option<ToggleEdit> {
        self.run(ctx, descriptor, motion, line_kind, |kind| {
            resolve_region(ctx, motion, kind)
        })
    }

    fn run<C, R>(
        &self,
        ctx: &C,
        descriptor: &CommentDescriptor,
        motion: MotionKind,
        line_kind: LineKind,
        resolve: R,
    ) -> Option<ToggleEdit>
    where
        C: EditorContext,
        R: Fn(LineKind) -> Region,
    {
        let mut region = resolve(effective_kind(descriptor, line_kind));

        let descriptor = settle(ctx, "pre", is_fn(self.hooks.pre.as_deref(), &region))
            .flatten()
            .unwrap_or_else(|| descriptor.clone());

        let kind = effective_kind(&descriptor, line_kind);
        if kind != region.line_kind {
            region = resolve(kind);
        }

        let matcher = match CommentMatcher::new(&descriptor) {
            Ok(matcher) => matcher,
            Err(err) => {
                ctx.notify_error(&format!(
                    "Cannot match comment syntax {:?} {:?}: {}",
                    descriptor.left, descriptor.right, err
                ));
                return None;
            }
        };

        let (lines, action) = match kind {
            LineKind::Block if motion.is_charwise() && region.is_single_line() => {
                self.toggle_span(&region, &matcher)
            }
            LineKind::Block if region.is_single_line() => self.toggle_block_line(&region, &matcher),
            LineKind::Block => self.toggle_block_ends(&region, &matcher),
            LineKind::Line => self.toggle_lines(ctx, &region, &matcher),
        };

        log::debug!(
            "{:?} lines {}..={} ({})",
            action,
            region.start_line,
            region.end_line,
            kind.as_str()
        );

        Some(ToggleEdit {
            region,
            lines,
            action,
        })
    }

    fn is_ignored<C: EditorContext>(&self, ctx: &C, line: &str) -> bool {
        ignore_line(line, self.ignore.as_ref())
            || settle(ctx, "ignore", is_fn(self.hooks.ignore.as_deref(), line)).unwrap_or(false)
    }

    /// Line-wise: uncomment when every deciding line is commented, otherwise
    /// comment them all at their shared indentation. Empty lines follow
    /// along but do not take part in the decision; ignored lines are skipped.
    fn toggle_lines<C: EditorContext>(
        &self,
        ctx: &C,
        region: &Region,
        matcher: &CommentMatcher,
    ) -> (Vec<String>, ToggleAction) {
        let pad = self.config.padding;
        let skipped: Vec<bool> = if region.is_single_line() {
            vec![false; region.lines.len()]
        } else {
            region.lines.iter().map(|line| self.is_ignored(ctx, line)).collect()
        };

        if skipped.iter().all(|skip| *skip) {
            return (region.lines.clone(), ToggleAction::Unchanged);
        }

        let deciding: Vec<&str> = region
            .lines
            .iter()
            .zip(&skipped)
            .filter(|(line, skip)| !**skip && !text::is_empty(line))
            .map(|(line, _)| line.as_str())
            .collect();

        let commented =
            !deciding.is_empty() && deciding.iter().all(|line| matcher.is_line_commented(line));

        // The indentation every deciding line starts with, compared
        // character by character so tabs and spaces never count as equal.
        let spacing = deciding
            .iter()
            .map(|line| text::indent_of(line))
            .reduce(|a, b| text::common_prefix(a, b));

        let CommentDescriptor { left, right } = matcher.descriptor();
        let lines = region
            .lines
            .iter()
            .zip(&skipped)
            .map(|(line, skip)| {
                if *skip {
                    return line.clone();
                }
                let out = if commented {
                    uncomment_line(line, matcher, pad)
                } else {
                    comment_line(line, left, right, pad, spacing)
                };
                log::trace!("{:?} -> {:?}", line, out);
                out
            })
            .collect();

        let action = if commented {
            ToggleAction::Uncomment
        } else {
            ToggleAction::Comment
        };
        (lines, action)
    }

    fn toggle_block_line(
        &self,
        region: &Region,
        matcher: &CommentMatcher,
    ) -> (Vec<String>, ToggleAction) {
        let Some(line) = region.lines.first() else {
            return (Vec::new(), ToggleAction::Unchanged);
        };

        let (indent, rest) = text::split_indent(line);
        match matcher.is_block_commented(rest) {
            Some("") => (vec![String::new()], ToggleAction::Uncomment),
            Some(middle) => (vec![format!("{}{}", indent, middle)], ToggleAction::Uncomment),
            None => {
                let CommentDescriptor { left, right } = matcher.descriptor();
                let out = comment_line(line, left, right, self.config.padding, None);
                (vec![out], ToggleAction::Comment)
            }
        }
    }

    /// Block-wise over several lines: only the first and last lines change.
    fn toggle_block_ends(
        &self,
        region: &Region,
        matcher: &CommentMatcher,
    ) -> (Vec<String>, ToggleAction) {
        let [first, last] = region.lines.as_slice() else {
            return (region.lines.clone(), ToggleAction::Unchanged);
        };

        let pad = self.config.padding;
        let CommentDescriptor { left, right } = matcher.descriptor();
        if matcher.is_block_bounded(first, last) {
            (
                vec![unopen_block(first, left, pad), unclose_block(last, right, pad)],
                ToggleAction::Uncomment,
            )
        } else {
            (
                vec![open_block(first, left, pad), close_block(last, right, pad)],
                ToggleAction::Comment,
            )
        }
    }

    fn toggle_span(&self, region: &Region, matcher: &CommentMatcher) -> (Vec<String>, ToggleAction) {
        let Some(line) = region.lines.first() else {
            return (Vec::new(), ToggleAction::Unchanged);
        };

        let (out, action) = comment_span(
            line,
            region.start_col,
            region.end_col,
            matcher,
            self.config.padding,
        );
        (vec![out], action)
    }
}
