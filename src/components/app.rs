use leptos::{component, view, IntoView, SignalGet};
use leptos_meta::{provide_meta_context, Title};

use crate::tips::use_tipsta;
use crate::tooltip::TipOptions;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Second area of the floor plan, raised a little further than the default
    let map_error = use_tipsta(
        "#floor_plan",
        TipOptions {
            area: Some(1),
            distance: Some(30),
            ..TipOptions::default()
        },
    );
    let link_error = use_tipsta(
        ".demo-links a",
        TipOptions {
            css_class: Some("tooltip-small".to_string()),
            easing: Some("easeOutBack".to_string()),
            y: Some(4),
            ..TipOptions::default()
        },
    );

    let errors = move || {
        [map_error.get(), link_error.get()]
            .into_iter()
            .flatten()
            .map(|err| view! { <p class="tip-error">{err.to_string()}</p> })
            .collect::<Vec<_>>()
    };

    view! {
        <Title text="Tipsta"/>

        <div class="app">
            <h1>"Ground floor"</h1>
            <div class="plan">
                <img src="floorplan.svg" usemap="#floor_plan" width="400" height="240" alt="Ground floor plan"/>
            </div>
            <map id="floor_plan" name="floor_plan">
                <area shape="rect" coords="10,10,190,130" href="#kitchen" alt="Kitchen"/>
                <area shape="rect" coords="210,10,390,230" href="#lounge" alt="Lounge and dining"/>
            </map>

            <p class="demo-links">
                <a id="link_docs" href="#docs" title="Read the documentation">"Docs"</a>
                " · "
                <a id="link_source" href="#source" title="Browse the source">"Source"</a>
                " · "
                <a id="link_blank" href="#blank">"No caption"</a>
            </p>

            {errors}
        </div>
    }
}
