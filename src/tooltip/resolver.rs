use crate::error::{GeometryError, Result, TipError};
use crate::logging::log;

use super::caption::caption_for;
use super::config::TipConfig;
use super::easing::is_named;
use super::hover::HoverMachine;
use super::position::{place_tip, Position};
use super::region::region_anchor;
use super::style::{BoxStyle, TipMetrics};
use super::target::Target;

/// Document capabilities the resolver needs.
///
/// The browser implementation lives in `crate::dom`; tests use an in-memory
/// document.
pub trait TipHost {
    type Node: Clone;

    /// Targets matching `selector`, in document order
    ///
    /// # Errors
    ///
    /// Returns `TipError::MissingId` for a matched element without an id.
    fn select(&self, selector: &str) -> Result<Vec<Target>>;

    /// Blank the native `title` of the target and of its active area
    fn suppress_native_title(&mut self, target: &Target, area: usize);

    fn find_node(&self, id: &str) -> Option<Self::Node>;

    /// Reset a reused node to the hidden state new nodes start in
    fn hide_node(&mut self, node: &Self::Node);

    /// Create a hidden tooltip node and append it to the `anchor` container
    ///
    /// # Errors
    ///
    /// Returns `TipError::AnchorNotFound` when `anchor` matches nothing.
    fn create_node(&mut self, id: &str, caption: &str, css_class: &str, anchor: &str) -> Result<Self::Node>;

    /// Resolved style of the target's parent element
    fn parent_box(&self, target: &Target) -> BoxStyle;

    /// Resolved style of the parent of the first image using map `map_id`
    fn map_image_parent_box(&self, map_id: &str) -> Option<BoxStyle>;

    /// Measure the node while laid out but invisible, then hide it again
    fn measure(&mut self, node: &Self::Node) -> TipMetrics;

    /// Write `position` as the node's static `top`/`left`
    ///
    /// # Errors
    ///
    /// Returns `TipError::Dom` if the style cannot be written.
    fn place(&mut self, node: &Self::Node, position: Position) -> Result<()>;

    /// Run `hover` transitions on `node` when the pointer enters or leaves `target`
    ///
    /// # Errors
    ///
    /// Returns `TipError::Dom` if the listeners cannot be registered.
    fn bind_hover(&mut self, target: &Target, node: &Self::Node, hover: HoverMachine) -> Result<()>;
}

/// Attaches tooltips to targets of one host using a fixed configuration
pub struct TipResolver<H: TipHost> {
    host: H,
    config: TipConfig,
}

impl<H: TipHost> TipResolver<H> {
    #[must_use]
    pub fn new(host: H, config: TipConfig) -> Self {
        Self { host, config }
    }

    #[must_use]
    pub fn config(&self) -> &TipConfig {
        &self.config
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Caption for `target`, after silencing its native tooltip
    pub fn resolve_caption(&mut self, target: &Target, override_caption: &str) -> String {
        self.host.suppress_native_title(target, self.config.area);
        caption_for(target, override_caption, self.config.area)
    }

    /// Reuse the node `id` if it is already in the document, otherwise create it.
    ///
    /// Either way the node starts out hidden.
    ///
    /// # Errors
    ///
    /// Propagates host failures creating or appending the node.
    pub fn ensure_tooltip_node(&mut self, id: &str, caption: &str) -> Result<H::Node> {
        if let Some(node) = self.host.find_node(id) {
            self.host.hide_node(&node);
            return Ok(node);
        }

        log!("Creating tooltip node {}", id);
        self.host
            .create_node(id, caption, &self.config.css_class, &self.config.anchor)
    }

    /// Resting position of `node` for `target`
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` for image maps without a usable area or
    /// without an image referencing them.
    pub fn compute_position(&mut self, target: &Target, node: &H::Node) -> Result<Position> {
        let (base, reference) = if target.is_map() {
            let base = self.map_anchor(target)?;
            let reference = self
                .host
                .map_image_parent_box(&target.id)
                .ok_or_else(|| GeometryError::NoImage {
                    map_id: target.id.clone(),
                })?;
            (base, reference)
        } else {
            (Position::default(), self.host.parent_box(target))
        };

        let metrics = self.host.measure(node);
        Ok(place_tip(base, &reference, &metrics, &self.config))
    }

    /// Attach a tooltip to every element matching `selector`.
    ///
    /// Returns the baseline positions in document order. Targets handled
    /// before a failing one keep their tooltips.
    ///
    /// # Errors
    ///
    /// Returns `TipError::TargetNotFound` if nothing matches, and propagates
    /// the first caption, node, geometry or binding failure.
    pub fn attach(&mut self, selector: &str) -> Result<Vec<Position>> {
        let targets = self.host.select(selector)?;
        if targets.is_empty() {
            return Err(TipError::TargetNotFound(selector.to_string()));
        }

        if !is_named(&self.config.easing) {
            log!("Easing '{}' is not a named curve, using it as a CSS timing function", self.config.easing);
        }

        let override_caption = self.config.caption.clone();
        let mut positions = Vec::with_capacity(targets.len());

        for target in &targets {
            let caption = self.resolve_caption(target, &override_caption);
            let node = self.ensure_tooltip_node(&target.tip_id(), &caption)?;
            let position = self.compute_position(target, &node)?;

            self.host.place(&node, position)?;
            self.host
                .bind_hover(target, &node, HoverMachine::new(position, &self.config))?;

            log!("Tooltip for {} placed at {}, {}", target.id, position.top, position.left);
            positions.push(position);
        }

        Ok(positions)
    }

    fn map_anchor(&self, target: &Target) -> Result<Position> {
        let regions = target.regions();
        if regions.is_empty() {
            return Err(GeometryError::NoRegions {
                map_id: target.id.clone(),
            }
            .into());
        }

        let region = target
            .active_region(self.config.area)
            .ok_or_else(|| GeometryError::RegionOutOfRange {
                map_id: target.id.clone(),
                index: self.config.area,
                len: regions.len(),
            })?;

        Ok(region_anchor(&target.id, &region.coords)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tooltip::caption::NO_CAPTION;
    use crate::tooltip::hover::TipPhase;
    use crate::tooltip::target::{Region, TargetKind};
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    struct FakeNode {
        id: String,
        caption: String,
        css_class: String,
        anchor: String,
    }

    /// In-memory document: targets by selector, one parent style per target
    #[derive(Default)]
    struct FakeDocument {
        selections: HashMap<String, Vec<Target>>,
        parents: HashMap<String, BoxStyle>,
        map_images: HashMap<String, BoxStyle>,
        anchors: Vec<String>,
        nodes: Vec<FakeNode>,
        blanked: Vec<String>,
        blanked_areas: Vec<(String, usize)>,
        hidden: Vec<String>,
        placed: HashMap<String, Position>,
        hovers: HashMap<String, HoverMachine>,
        tip_width: f64,
        tip_padding_top: String,
    }

    impl FakeDocument {
        fn new() -> Self {
            Self {
                anchors: vec!["body".to_string()],
                tip_width: 80.0,
                ..Self::default()
            }
        }

        fn with_target(mut self, selector: &str, target: Target, parent: BoxStyle) -> Self {
            self.parents.insert(target.id.clone(), parent);
            self.selections.entry(selector.to_string()).or_default().push(target);
            self
        }

        fn with_map_image(mut self, map_id: &str, parent: BoxStyle) -> Self {
            self.map_images.insert(map_id.to_string(), parent);
            self
        }
    }

    impl TipHost for FakeDocument {
        type Node = FakeNode;

        fn select(&self, selector: &str) -> Result<Vec<Target>> {
            let targets = self.selections.get(selector).cloned().unwrap_or_default();
            if targets.iter().any(|t| t.id.is_empty()) {
                return Err(TipError::MissingId);
            }
            Ok(targets)
        }

        fn suppress_native_title(&mut self, target: &Target, area: usize) {
            self.blanked.push(target.id.clone());

            let regions = target.regions().len();
            let active = match regions {
                1 => Some(0),
                _ if area < regions => Some(area),
                _ => None,
            };
            if let Some(index) = active {
                self.blanked_areas.push((target.id.clone(), index));
            }

            for targets in self.selections.values_mut() {
                for t in targets.iter_mut().filter(|t| t.id == target.id) {
                    t.title = Some(String::new());
                    if let (Some(index), TargetKind::Map { regions }) = (active, &mut t.kind) {
                        regions[index].title = Some(String::new());
                    }
                }
            }
        }

        fn find_node(&self, id: &str) -> Option<FakeNode> {
            self.nodes.iter().find(|n| n.id == id).cloned()
        }

        fn hide_node(&mut self, node: &FakeNode) {
            self.hidden.push(node.id.clone());
        }

        fn create_node(&mut self, id: &str, caption: &str, css_class: &str, anchor: &str) -> Result<FakeNode> {
            if !self.anchors.iter().any(|a| a == anchor) {
                return Err(TipError::AnchorNotFound(anchor.to_string()));
            }
            let node = FakeNode {
                id: id.to_string(),
                caption: caption.to_string(),
                css_class: css_class.to_string(),
                anchor: anchor.to_string(),
            };
            self.nodes.push(node.clone());
            Ok(node)
        }

        fn parent_box(&self, target: &Target) -> BoxStyle {
            self.parents.get(&target.id).cloned().unwrap_or_default()
        }

        fn map_image_parent_box(&self, map_id: &str) -> Option<BoxStyle> {
            self.map_images.get(map_id).cloned()
        }

        fn measure(&mut self, _node: &FakeNode) -> TipMetrics {
            TipMetrics {
                width: self.tip_width,
                padding_top: self.tip_padding_top.clone(),
                margin_top: String::new(),
            }
        }

        fn place(&mut self, node: &FakeNode, position: Position) -> Result<()> {
            self.placed.insert(node.id.clone(), position);
            Ok(())
        }

        fn bind_hover(&mut self, target: &Target, _node: &FakeNode, hover: HoverMachine) -> Result<()> {
            self.hovers.insert(target.id.clone(), hover);
            Ok(())
        }
    }

    fn at(top: &str, left: &str) -> BoxStyle {
        BoxStyle {
            top: top.to_string(),
            left: left.to_string(),
            ..BoxStyle::default()
        }
    }

    fn floor_plan() -> Target {
        Target::map(
            "plan",
            vec![Region::new("10,20,50,20,50,60,10,60").with_alt("Kitchen")],
        )
    }

    #[test]
    fn test_attach_plain_element() {
        let doc = FakeDocument::new().with_target(
            "#logo",
            Target::element("logo").with_alt("Company logo"),
            at("100px", "50px"),
        );
        let mut resolver = TipResolver::new(doc, TipConfig::default());

        let positions = resolver.attach("#logo").expect("attach should succeed");
        assert_eq!(positions, vec![Position { top: 100, left: 10 }]);

        let doc = resolver.into_host();
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].id, "logo_tip");
        assert_eq!(doc.nodes[0].caption, "Company logo");
        assert_eq!(doc.nodes[0].css_class, "tooltip");
        assert_eq!(doc.nodes[0].anchor, "body");
        assert_eq!(doc.placed.get("logo_tip"), Some(&Position { top: 100, left: 10 }));
    }

    #[test]
    fn test_attach_applies_offsets_and_tip_padding() {
        let mut doc = FakeDocument::new().with_target("#logo", Target::element("logo"), at("100px", "50px"));
        doc.tip_padding_top = "5px".to_string();
        let config = TipConfig {
            x: 3,
            y: 4,
            ..TipConfig::default()
        };
        let mut resolver = TipResolver::new(doc, config);

        let positions = resolver.attach("#logo").expect("attach should succeed");
        assert_eq!(positions, vec![Position { top: 109, left: 13 }]);
    }

    #[test]
    fn test_attach_image_map_area() {
        let doc = FakeDocument::new()
            .with_target("#plan", floor_plan(), BoxStyle::default())
            .with_map_image("plan", at("8px", "12px"));
        let mut resolver = TipResolver::new(doc, TipConfig::default());

        let positions = resolver.attach("#plan").expect("attach should succeed");
        // anchor (60, 30) + image parent (8, 12) - half tip width 40
        assert_eq!(positions, vec![Position { top: 68, left: 2 }]);
        assert_eq!(resolver.host().nodes[0].caption, "Kitchen");
    }

    #[test]
    fn test_attach_twice_reuses_node() {
        let doc = FakeDocument::new().with_target("#logo", Target::element("logo").with_title("Home"), at("0", "0"));
        let mut resolver = TipResolver::new(doc, TipConfig::default());

        let first = resolver.attach("#logo").expect("first attach");
        let second = resolver.attach("#logo").expect("second attach");

        assert_eq!(first, second);
        let doc = resolver.into_host();
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].caption, "Home");
    }

    #[test]
    fn test_attach_blanks_native_title() {
        let doc = FakeDocument::new().with_target("#logo", Target::element("logo").with_title("Home"), at("0", "0"));
        let mut resolver = TipResolver::new(doc, TipConfig::default());
        resolver.attach("#logo").expect("attach");

        let doc = resolver.into_host();
        assert_eq!(doc.blanked, vec!["logo".to_string()]);
        let stored = &doc.selections["#logo"][0];
        assert_eq!(stored.title.as_deref(), Some(""));
    }

    #[test]
    fn test_attach_blanks_only_selected_area_title() {
        let map = Target::map(
            "plan",
            vec![
                Region::new("0,0,10,10").with_title("Hall"),
                Region::new("0,0,20,20").with_title("Study"),
            ],
        );
        let doc = FakeDocument::new()
            .with_target("#plan", map, BoxStyle::default())
            .with_map_image("plan", BoxStyle::default());
        let config = TipConfig {
            area: 1,
            ..TipConfig::default()
        };
        let mut resolver = TipResolver::new(doc, config);
        resolver.attach("#plan").expect("attach");

        let doc = resolver.into_host();
        assert_eq!(doc.blanked_areas, vec![("plan".to_string(), 1)]);
        assert_eq!(doc.nodes[0].caption, "Study");
        let regions = doc.selections["#plan"][0].regions();
        assert_eq!(regions[0].title.as_deref(), Some("Hall"));
        assert_eq!(regions[1].title.as_deref(), Some(""));
    }

    #[test]
    fn test_existing_node_is_hidden_not_recreated() {
        let mut doc = FakeDocument::new().with_target("#logo", Target::element("logo").with_alt("Logo"), at("0", "0"));
        doc.nodes.push(FakeNode {
            id: "logo_tip".to_string(),
            caption: "Left over".to_string(),
            css_class: "tooltip".to_string(),
            anchor: "body".to_string(),
        });
        let mut resolver = TipResolver::new(doc, TipConfig::default());
        resolver.attach("#logo").expect("attach");

        let doc = resolver.into_host();
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].caption, "Left over");
        assert_eq!(doc.hidden, vec!["logo_tip".to_string()]);
    }

    #[test]
    fn test_new_node_is_not_hidden_twice() {
        let doc = FakeDocument::new().with_target("#logo", Target::element("logo"), at("0", "0"));
        let mut resolver = TipResolver::new(doc, TipConfig::default());
        resolver.attach("#logo").expect("attach");
        assert!(resolver.host().hidden.is_empty());
    }

    #[test]
    fn test_empty_selection_is_target_not_found() {
        let mut resolver = TipResolver::new(FakeDocument::new(), TipConfig::default());
        let result = resolver.attach("#missing");
        assert_eq!(result, Err(TipError::TargetNotFound("#missing".to_string())));
    }

    #[test]
    fn test_element_without_id() {
        let doc = FakeDocument::new().with_target(".tip", Target::element(""), BoxStyle::default());
        let mut resolver = TipResolver::new(doc, TipConfig::default());
        assert_eq!(resolver.attach(".tip"), Err(TipError::MissingId));
    }

    #[test]
    fn test_map_without_areas_is_geometry_error() {
        let doc = FakeDocument::new()
            .with_target("#plan", Target::map("plan", Vec::new()), BoxStyle::default())
            .with_map_image("plan", BoxStyle::default());
        let mut resolver = TipResolver::new(doc, TipConfig::default());

        let result = resolver.attach("#plan");
        assert_eq!(
            result,
            Err(TipError::Geometry(GeometryError::NoRegions { map_id: "plan".to_string() }))
        );
    }

    #[test]
    fn test_map_without_image_is_geometry_error() {
        let doc = FakeDocument::new().with_target("#plan", floor_plan(), BoxStyle::default());
        let mut resolver = TipResolver::new(doc, TipConfig::default());

        let result = resolver.attach("#plan");
        assert_eq!(
            result,
            Err(TipError::Geometry(GeometryError::NoImage { map_id: "plan".to_string() }))
        );
    }

    #[test]
    fn test_area_index_out_of_range() {
        let map = Target::map("plan", vec![Region::new("0,0,1,1"), Region::new("0,0,2,2")]);
        let doc = FakeDocument::new()
            .with_target("#plan", map, BoxStyle::default())
            .with_map_image("plan", BoxStyle::default());
        let config = TipConfig {
            area: 2,
            ..TipConfig::default()
        };
        let mut resolver = TipResolver::new(doc, config);

        assert!(matches!(
            resolver.attach("#plan"),
            Err(TipError::Geometry(GeometryError::RegionOutOfRange { index: 2, len: 2, .. }))
        ));
    }

    #[test]
    fn test_selected_area_drives_geometry() {
        let map = Target::map(
            "plan",
            vec![Region::new("0,0,10,10"), Region::new("100,100,200,140").with_alt("Garage")],
        );
        let mut doc = FakeDocument::new()
            .with_target("#plan", map, BoxStyle::default())
            .with_map_image("plan", BoxStyle::default());
        doc.tip_width = 0.0;
        let config = TipConfig {
            area: 1,
            ..TipConfig::default()
        };
        let mut resolver = TipResolver::new(doc, config);

        let positions = resolver.attach("#plan").expect("attach");
        assert_eq!(positions, vec![Position { top: 140, left: 150 }]);
        assert_eq!(resolver.host().nodes[0].caption, "Garage");
    }

    #[test]
    fn test_missing_anchor() {
        let doc = FakeDocument::new().with_target("#logo", Target::element("logo"), BoxStyle::default());
        let config = TipConfig {
            anchor: "#sidebar".to_string(),
            ..TipConfig::default()
        };
        let mut resolver = TipResolver::new(doc, config);
        assert_eq!(
            resolver.attach("#logo"),
            Err(TipError::AnchorNotFound("#sidebar".to_string()))
        );
    }

    #[test]
    fn test_earlier_targets_keep_tips_on_failure() {
        let doc = FakeDocument::new()
            .with_target(".tips", Target::element("first"), BoxStyle::default())
            .with_target(".tips", floor_plan(), BoxStyle::default());
        let mut resolver = TipResolver::new(doc, TipConfig::default());

        assert!(resolver.attach(".tips").is_err());
        let doc = resolver.into_host();
        assert!(doc.placed.contains_key("first_tip"));
        assert!(doc.hovers.contains_key("first"));
    }

    #[test]
    fn test_caption_override_and_sentinel() {
        let doc = FakeDocument::new()
            .with_target(".tips", Target::element("a"), BoxStyle::default())
            .with_target(".tips", Target::element("b").with_alt("Bee"), BoxStyle::default());
        let mut resolver = TipResolver::new(doc, TipConfig::default());
        resolver.attach(".tips").expect("attach");
        assert_eq!(resolver.host().nodes[0].caption, NO_CAPTION);

        let doc = FakeDocument::new().with_target("#b", Target::element("b").with_alt("Bee"), BoxStyle::default());
        let config = TipConfig {
            caption: "Override".to_string(),
            ..TipConfig::default()
        };
        let mut resolver = TipResolver::new(doc, config);
        resolver.attach("#b").expect("attach");
        assert_eq!(resolver.host().nodes[0].caption, "Override");
    }

    #[test]
    fn test_hover_uses_fixed_baseline() {
        let doc = FakeDocument::new().with_target("#logo", Target::element("logo"), at("100px", "50px"));
        let mut resolver = TipResolver::new(doc, TipConfig::default());
        resolver.attach("#logo").expect("attach");

        let mut doc = resolver.into_host();
        let hover = doc.hovers.get_mut("logo").expect("hover bound");
        let show = hover.enter().expect("show");
        assert_eq!(show.to.top, 80);
        let hide = hover.leave().expect("hide");
        assert_eq!(hide.to.top, 100);
        assert_eq!(hover.settle(hide.generation), Some(TipPhase::Hidden));
    }
}
