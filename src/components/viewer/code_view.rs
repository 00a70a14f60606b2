//! Code view.
//!
//! Draws a [`DisplayRequest`]: a numbered line per source line, bracket
//! colouring and visible whitespace as configured, and an optional minimap.
//! Editing is allowed only when the request is not read-only; edits stay in
//! the DOM and never reach the file tree.

use codeview_core::{BRACKET_COLORS, DisplayRequest, RenderedLine, Segment, render_lines};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

const BRACKET_CLASSES: [&str; BRACKET_COLORS] = [css::bracket0, css::bracket1, css::bracket2];

#[component]
pub fn CodeView(request: DisplayRequest) -> impl IntoView {
    let options = &request.options;
    let lines = render_lines(&request);

    let class = if options.word_wrap {
        format!("{} {}", css::code, css::wrap)
    } else {
        css::code.to_string()
    };
    let style = format!(
        "font-family: {}; font-size: {}px; tab-size: {};",
        options.font_family, options.font_size, options.tab_size
    );
    let line_numbers = options.line_numbers;
    let minimap = options.minimap.then(|| view! { <Minimap lines=lines.clone() /> });
    let editable = (!request.read_only).to_string();

    view! {
        <div class=css::editor data-theme=request.theme.editor_name()>
            <div
                class=class
                style=style
                data-language=request.language_tag()
                contenteditable=editable
                spellcheck="false"
            >
                {lines
                    .into_iter()
                    .map(|line| view! { <Line line=line numbered=line_numbers /> })
                    .collect_view()}
            </div>
            {minimap}
        </div>
    }
}

#[component]
fn Line(line: RenderedLine, numbered: bool) -> impl IntoView {
    let number = numbered.then(|| {
        view! {
            <span class=css::lineNumber contenteditable="false">{line.number}</span>
        }
    });

    view! {
        <div class=css::line>
            {number}
            <span class=css::lineText>
                {line.segments.into_iter().map(segment_view).collect_view()}
            </span>
        </div>
    }
}

fn segment_view(segment: Segment) -> AnyView {
    match segment.bracket {
        Some(slot) => view! {
            <span class=BRACKET_CLASSES[slot % BRACKET_COLORS]>{segment.text}</span>
        }
        .into_any(),
        None => segment.text.into_any(),
    }
}

/// Scaled-down outline of the file, one bar per line.
#[component]
fn Minimap(lines: Vec<RenderedLine>) -> impl IntoView {
    view! {
        <div class=css::minimap aria-hidden="true">
            {lines
                .into_iter()
                .map(|line| {
                    let width: usize = line.segments.iter().map(|s| s.text.chars().count()).sum();
                    let style = format!("width: {}%;", width.min(100));
                    view! { <div class=css::minimapLine style=style></div> }
                })
                .collect_view()}
        </div>
    }
}
