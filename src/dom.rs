//! Browser implementation of `TipHost` on top of `web_sys`.
//!
//! Fading and sliding is left to CSS transitions on `opacity` and `top`; a
//! timer per transition reports completion back to the tooltip's
//! `HoverMachine` so the node can be taken out of layout once hidden.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::error::{Result, TipError};
use crate::logging::log;
use crate::tooltip::{
    BoxStyle, HoverMachine, Position, Region, Target, TargetKind, TipConfig, TipHost, TipMetrics, TipPhase,
    TipResolver, Transition,
};

type HoverListener = Closure<dyn Fn(MouseEvent)>;

struct BoundListener {
    target_id: String,
    element: Element,
    event: &'static str,
    closure: HoverListener,
}

/// `TipHost` over the live document
pub struct WebHost {
    document: Document,
    listeners: Vec<BoundListener>,
}

fn dom_error(context: &'static str) -> impl Fn(JsValue) -> TipError {
    move |err| TipError::Dom(format!("{context}: {err:?}"))
}

fn computed(element: &Element, property: &str) -> String {
    web_sys::window()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .and_then(|style| style.get_property_value(property).ok())
        .unwrap_or_default()
}

fn box_style_of(element: &Element) -> BoxStyle {
    BoxStyle {
        top: computed(element, "top"),
        left: computed(element, "left"),
        margin_top: computed(element, "margin-top"),
        margin_left: computed(element, "margin-left"),
        padding_top: computed(element, "padding-top"),
        padding_left: computed(element, "padding-left"),
    }
}

fn elements(list: &web_sys::NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

fn area_elements(map: &Element) -> Vec<Element> {
    let Ok(list) = map.query_selector_all("area") else {
        return Vec::new();
    };
    elements(&list).collect()
}

fn read_target(element: &Element) -> Result<Target> {
    let id = element.id();
    if id.is_empty() {
        return Err(TipError::MissingId);
    }

    let kind = if element.tag_name().eq_ignore_ascii_case("map") {
        let regions = area_elements(element)
            .iter()
            .map(|area| Region {
                alt: area.get_attribute("alt"),
                title: area.get_attribute("title"),
                coords: area.get_attribute("coords").unwrap_or_default(),
            })
            .collect();
        TargetKind::Map { regions }
    } else {
        TargetKind::Element
    };

    Ok(Target {
        id,
        alt: element.get_attribute("alt"),
        title: element.get_attribute("title"),
        kind,
    })
}

/// Hidden resting state: out of layout and fully transparent
fn hide(node: &HtmlElement) {
    let style = node.style();
    let _ = style.set_property("display", "none");
    let _ = style.set_property("opacity", "0");
}

fn run_transition(node: &HtmlElement, machine: &Rc<RefCell<HoverMachine>>, transition: &Transition) {
    let style = node.style();
    let duration = transition.duration_ms;
    let easing = &transition.easing;

    if transition.phase == TipPhase::Shown {
        let _ = style.set_property("display", "block");
        // Flush layout so the fade starts from the hidden values
        let _ = node.offset_width();
    }

    let _ = style.set_property(
        "transition",
        &format!("opacity {duration}ms {easing}, top {duration}ms {easing}"),
    );
    let _ = style.set_property("opacity", &transition.to.opacity.to_string());
    let _ = style.set_property("top", &format!("{}px", transition.to.top));

    let node = node.clone();
    let machine = Rc::clone(machine);
    let generation = transition.generation;
    Timeout::new(duration, move || {
        let settled = machine.borrow_mut().settle(generation);
        if settled == Some(TipPhase::Hidden) {
            let _ = node.style().set_property("display", "none");
        }
    })
    .forget();
}

impl WebHost {
    /// Host for the current window's document
    ///
    /// # Errors
    ///
    /// Returns `TipError::Dom` outside a browser window.
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| TipError::Dom("No document".to_string()))?;
        Ok(Self::from_document(document))
    }

    #[must_use]
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            listeners: Vec::new(),
        }
    }

    /// Remove every hover listener this host registered
    pub fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener
                .element
                .remove_event_listener_with_callback(listener.event, listener.closure.as_ref().unchecked_ref());
        }
    }

    /// Keep the listeners alive for the rest of the page's life
    pub fn forget_listeners(self) {
        for listener in self.listeners {
            listener.closure.forget();
        }
    }

    fn unbind(&mut self, target_id: &str) {
        let (stale, kept): (Vec<_>, Vec<_>) = self
            .listeners
            .drain(..)
            .partition(|listener| listener.target_id == target_id);
        self.listeners = kept;

        for listener in stale {
            let _ = listener
                .element
                .remove_event_listener_with_callback(listener.event, listener.closure.as_ref().unchecked_ref());
        }
    }

    fn listen(&mut self, target_id: &str, element: &Element, event: &'static str, closure: HoverListener) -> Result<()> {
        element
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(dom_error("Failed to add hover listener"))?;
        self.listeners.push(BoundListener {
            target_id: target_id.to_string(),
            element: element.clone(),
            event,
            closure,
        });
        Ok(())
    }
}

impl TipHost for WebHost {
    type Node = HtmlElement;

    fn select(&self, selector: &str) -> Result<Vec<Target>> {
        let matched = self
            .document
            .query_selector_all(selector)
            .map_err(dom_error("Invalid selector"))?;
        elements(&matched).map(|element| read_target(&element)).collect()
    }

    fn suppress_native_title(&mut self, target: &Target, area: usize) {
        let Some(element) = self.document.get_element_by_id(&target.id) else {
            return;
        };
        let _ = element.set_attribute("title", "");

        if target.is_map() {
            let areas = area_elements(&element);
            let active = if areas.len() == 1 { areas.first() } else { areas.get(area) };
            if let Some(active) = active {
                let _ = active.set_attribute("title", "");
            }
        }
    }

    fn find_node(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn hide_node(&mut self, node: &HtmlElement) {
        hide(node);
    }

    fn create_node(&mut self, id: &str, caption: &str, css_class: &str, anchor: &str) -> Result<HtmlElement> {
        let container = self
            .document
            .query_selector(anchor)
            .map_err(dom_error("Invalid anchor selector"))?
            .ok_or_else(|| TipError::AnchorNotFound(anchor.to_string()))?;

        let element = self
            .document
            .create_element("div")
            .map_err(dom_error("Failed to create tooltip"))?;
        element.set_id(id);
        element.set_inner_html(caption);
        if !css_class.is_empty() {
            element
                .class_list()
                .add_1(css_class)
                .map_err(dom_error("Invalid tooltip class"))?;
        }

        let node: HtmlElement = element
            .dyn_into()
            .map_err(|_| TipError::Dom("Tooltip is not an HTML element".to_string()))?;
        hide(&node);

        container
            .append_child(&node)
            .map_err(dom_error("Failed to append tooltip"))?;
        Ok(node)
    }

    fn parent_box(&self, target: &Target) -> BoxStyle {
        self.document
            .get_element_by_id(&target.id)
            .and_then(|element| element.parent_element())
            .map(|parent| box_style_of(&parent))
            .unwrap_or_default()
    }

    fn map_image_parent_box(&self, map_id: &str) -> Option<BoxStyle> {
        let images = self.document.query_selector_all("img[usemap]").ok()?;
        let image = elements(&images).find(|img| {
            img.get_attribute("usemap")
                .is_some_and(|usemap| usemap.strip_prefix('#').unwrap_or(&usemap) == map_id)
        })?;
        image.parent_element().map(|parent| box_style_of(&parent))
    }

    fn measure(&mut self, node: &HtmlElement) -> TipMetrics {
        let style = node.style();
        let _ = style.set_property("visibility", "hidden");
        let _ = style.set_property("display", "block");

        let metrics = TipMetrics {
            width: f64::from(node.offset_width()),
            padding_top: computed(node, "padding-top"),
            margin_top: computed(node, "margin-top"),
        };

        let _ = style.set_property("visibility", "visible");
        let _ = style.set_property("display", "none");
        metrics
    }

    fn place(&mut self, node: &HtmlElement, position: Position) -> Result<()> {
        let style = node.style();
        style
            .set_property("top", &format!("{}px", position.top))
            .map_err(dom_error("Failed to set tooltip top"))?;
        style
            .set_property("left", &format!("{}px", position.left))
            .map_err(dom_error("Failed to set tooltip left"))?;
        Ok(())
    }

    fn bind_hover(&mut self, target: &Target, node: &HtmlElement, hover: HoverMachine) -> Result<()> {
        let element = self
            .document
            .get_element_by_id(&target.id)
            .ok_or_else(|| TipError::TargetNotFound(format!("#{}", target.id)))?;

        // Re-attaching replaces the previous bindings instead of stacking them
        self.unbind(&target.id);

        let machine = Rc::new(RefCell::new(hover));

        let on_enter = {
            let machine = Rc::clone(&machine);
            let node = node.clone();
            let target_id = target.id.clone();
            Closure::wrap(Box::new(move |_event: MouseEvent| {
                let transition = machine.borrow_mut().enter();
                match transition {
                    Some(transition) => run_transition(&node, &machine, &transition),
                    None if machine.borrow().in_flight() => {
                        log!("Tooltip for {} still fading in, ignoring re-entry", target_id);
                    }
                    None => {
                        log!("Tooltip for {} already showing", target_id);
                    }
                }
            }) as Box<dyn Fn(MouseEvent)>)
        };

        let on_leave = {
            let node = node.clone();
            Closure::wrap(Box::new(move |_event: MouseEvent| {
                let transition = machine.borrow_mut().leave();
                if let Some(transition) = transition {
                    run_transition(&node, &machine, &transition);
                }
            }) as Box<dyn Fn(MouseEvent)>)
        };

        self.listen(&target.id, &element, "mouseenter", on_enter)?;
        self.listen(&target.id, &element, "mouseleave", on_leave)?;
        Ok(())
    }
}

#[cfg(feature = "perf_timing")]
fn now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}

/// Attach tooltips to everything matching `selector` in the current document.
///
/// On success the returned host owns the hover listeners; call
/// `WebHost::detach` to remove them or `WebHost::forget_listeners` to keep
/// them for the page's lifetime. On failure, listeners already bound for
/// earlier targets are kept alive.
///
/// # Errors
///
/// Returns the first `TipError` raised while resolving any target.
pub fn attach(selector: &str, config: TipConfig) -> Result<WebHost> {
    let mut resolver = TipResolver::new(WebHost::new()?, config);

    #[cfg(feature = "perf_timing")]
    let start = now_ms();

    let result = resolver.attach(selector);

    #[cfg(feature = "perf_timing")]
    {
        if let (Some(start), Some(end)) = (start, now_ms()) {
            log!("Resolved tooltips for {} in {:.2}ms", selector, end - start);
        }
    }

    let host = resolver.into_host();
    match result {
        Ok(_) => Ok(host),
        Err(err) => {
            web_sys::console::error_1(&format!("tipsta: {err}").into());
            host.forget_listeners();
            Err(err)
        }
    }
}

/// JavaScript entry point: `tipsta("#plan", { area: 1, distance: 30 })`
///
/// # Errors
///
/// Throws a JS `Error` carrying the `TipError` message.
#[wasm_bindgen]
pub fn tipsta(selector: &str, options: JsValue) -> std::result::Result<(), JsValue> {
    let to_js = |err: TipError| JsValue::from(js_sys::Error::new(&err.to_string()));

    let json = if options.is_undefined() || options.is_null() {
        "{}".to_string()
    } else {
        String::from(js_sys::JSON::stringify(&options)?)
    };

    let config = TipConfig::from_json(&json).map_err(to_js)?;
    attach(selector, config).map_err(to_js)?.forget_listeners();
    Ok(())
}
