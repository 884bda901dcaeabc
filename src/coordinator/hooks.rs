use anyhow::Result;
use regex::Regex;

use crate::molecules::region::EditorContext;
use crate::types::{CommentDescriptor, Region};

/// Runs before a toggle; a returned descriptor replaces the one passed in.
pub type PreHook = Box<dyn Fn(&Region) -> Result<Option<CommentDescriptor>>>;

/// Extra per-line skip predicate for line-wise toggles.
pub type IgnoreHook = Box<dyn Fn(&str) -> Result<bool>>;

/// Optional caller-supplied callbacks. Absent hooks behave like hooks that decline.
#[derive(Default)]
pub struct Hooks {
    pub pre: Option<PreHook>,
    pub ignore: Option<IgnoreHook>,
}

impl Hooks {
    pub fn pre(mut self, hook: impl Fn(&Region) -> Result<Option<CommentDescriptor>> + 'static) -> Self {
        self.pre = Some(Box::new(hook));
        self
    }

    pub fn ignore(mut self, hook: impl Fn(&str) -> Result<bool> + 'static) -> Self {
        self.ignore = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("pre", &self.pre.is_some())
            .field("ignore", &self.ignore.is_some())
            .finish()
    }
}

/// Call `candidate` with `args` if there is one.
pub fn is_fn<F, A, R>(candidate: Option<&F>, args: A) -> Option<R>
where
    F: Fn(A) -> R + ?Sized,
{
    candidate.map(|f| f(args))
}

/// Unwrap a hook outcome, reporting a failure to the user and treating it as
/// if no hook had run.
pub fn settle<C: EditorContext, T>(ctx: &C, name: &str, outcome: Option<Result<T>>) -> Option<T> {
    match outcome? {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{} hook failed: {:#}", name, err);
            ctx.notify_error(&format!("{} hook failed: {:#}", name, err));
            None
        }
    }
}

/// True when a pattern is given and matches anywhere in the line.
pub fn ignore_line(line: &str, pattern: Option<&Regex>) -> bool {
    pattern.is_some_and(|re| re.is_match(line))
}
