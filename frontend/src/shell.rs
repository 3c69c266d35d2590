use log::{info, warn};
use wasm_bindgen::JsValue;
use web_sys::Document;
use yew::prelude::*;

use crate::config::{SiteMetadata, METADATA};

/// Writes title, description and language onto the host document.
pub fn apply_metadata(meta: &SiteMetadata) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    document.set_title(meta.title);
    if let Some(root) = document.document_element() {
        root.set_attribute("lang", meta.lang)?;
    }
    description_tag(&document)?.set_attribute("content", meta.description)?;
    Ok(())
}

fn description_tag(document: &Document) -> Result<web_sys::Element, JsValue> {
    if let Some(existing) = document.query_selector("meta[name=\"description\"]")? {
        return Ok(existing);
    }
    let meta = document.create_element("meta")?;
    meta.set_attribute("name", "description")?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&meta)?;
    Ok(meta)
}

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub children: Children,
}

#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    use_effect_with_deps(
        move |_| {
            match apply_metadata(&METADATA) {
                Ok(()) => info!("Applied page metadata"),
                Err(e) => warn!("Could not apply page metadata: {:?}", e),
            }
            || ()
        },
        (),
    );

    html! {
        <div class="page-shell antialiased">
            <style>
                {r#"
                :root {
                    --background: #000000;
                    --foreground: #ffffff;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    background: var(--background);
                    color: var(--foreground);
                    font-family: var(--font-geist-sans), -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                code, .font-mono {
                    font-family: var(--font-geist-mono), ui-monospace, SFMono-Regular, Menlo, monospace;
                }

                .antialiased {
                    -webkit-font-smoothing: antialiased;
                    -moz-osx-font-smoothing: grayscale;
                }
                "#}
            </style>
            { for props.children.iter() }
        </div>
    }
}
