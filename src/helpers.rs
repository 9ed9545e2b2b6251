use once_cell::sync::Lazy;
use std::any::Any;
use std::borrow::Cow;
use std::cell::Cell;
use std::panic::{self, UnwindSafe};
use std::path::Path;

pub trait PathRefExt {
    /// Lowercase extension of the path, if it has one.
    fn ext(&self) -> Option<String>;
}

impl<T: AsRef<Path>> PathRefExt for T {
    fn ext(&self) -> Option<String> {
        self.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }
}

pub trait StrExt {
    /// Drops every U+0000 character. Borrows when there is nothing to drop.
    fn without_nul(&self) -> Cow<'_, str>;
}

impl StrExt for str {
    fn without_nul(&self) -> Cow<'_, str> {
        if self.contains('\0') {
            Cow::Owned(self.replace('\0', ""))
        } else {
            Cow::Borrowed(self)
        }
    }
}

thread_local! {
    static QUIET: Cell<bool> = Cell::new(false);
}

// Installed once, delegates to the previous hook unless the panicking thread is inside
// `catch_quietly`.
static QUIET_HOOK: Lazy<()> = Lazy::new(|| {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if !QUIET.with(Cell::get) {
            previous(info);
        }
    }));
});

/// Runs `f`, turning a panic into `Err` with the panic message.
///
/// Nothing is printed for a panic caught here. Panics on other threads, or outside of `f`, still
/// reach the previously installed hook.
pub fn catch_quietly<F, R>(f: F) -> Result<R, String>
where
    F: FnOnce() -> R + UnwindSafe,
{
    Lazy::force(&QUIET_HOOK);
    let was_quiet = QUIET.with(|quiet| quiet.replace(true));
    let result = panic::catch_unwind(f);
    QUIET.with(|quiet| quiet.set(was_quiet));
    result.map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("decoder panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("decoder panicked: {msg}")
    } else {
        "decoder panicked".into()
    }
}
