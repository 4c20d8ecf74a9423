use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::context::Context;

pub(super) struct Depth(usize);

static DEPTH: AtomicUsize = AtomicUsize::new(0);

impl Depth {
    pub(super) fn new() -> Self {
        Depth(DEPTH.fetch_add(1, Ordering::SeqCst))
    }
}

impl Drop for Depth {
    fn drop(&mut self) {
        DEPTH.fetch_sub(1, Ordering::SeqCst);
    }
}

impl std::ops::Deref for Depth {
    type Target = usize;
    fn deref(&self) -> &usize {
        &self.0
    }
}

pub(super) fn start(depth: usize, name: &str, ctx: &Context) {
    let gutter = anstyle::Style::new().bold();
    let input_style = anstyle::Style::new().underline();

    let width = call_width();
    let remaining: String = ctx.buffer()[ctx.position()..]
        .iter()
        .take(20)
        .collect::<String>();
    let call_column = format!("{:depth$}> {name}", "");

    let writer = anstream::stderr();
    let mut writer = writer.lock();
    let _ = writeln!(
        writer,
        "{call_column:width$} {g}|{gr} {s}{remaining:?}{sr}",
        g = gutter.render(),
        gr = gutter.render_reset(),
        s = input_style.render(),
        sr = input_style.render_reset(),
    );
}

pub(super) fn end(depth: usize, name: &str, consumed: Option<usize>, success: bool) {
    let gutter = anstyle::Style::new().bold();
    let width = call_width();
    let call_column = format!("{:depth$}< {name}", "");

    let (style, status) = if success {
        (
            anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Green.into())),
            format!("+{}", consumed.unwrap_or(0)),
        )
    } else {
        (
            anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Yellow.into())),
            "backtrack".to_owned(),
        )
    };

    let writer = anstream::stderr();
    let mut writer = writer.lock();
    let _ = writeln!(
        writer,
        "{s}{call_column:width$}{sr} {g}|{gr} {s}{status}{sr}",
        s = style.render(),
        sr = style.render_reset(),
        g = gutter.render(),
        gr = gutter.render_reset(),
    );
}

fn call_width() -> usize {
    let term_width = term_width();
    let min_call_width = 40;
    term_width.max(min_call_width)
}

fn term_width() -> usize {
    columns_env().or_else(query_width).unwrap_or(80)
}

fn query_width() -> Option<usize> {
    use is_terminal::IsTerminal;
    if std::io::stderr().is_terminal() {
        terminal_size::terminal_size().map(|(w, _h)| w.0.into())
    } else {
        None
    }
}

fn columns_env() -> Option<usize> {
    std::env::var("COLUMNS").ok().and_then(|c| c.parse().ok())
}
