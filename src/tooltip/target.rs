/// A clickable `<area>` of an image map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub alt: Option<String>,
    pub title: Option<String>,
    /// Raw `coords` attribute, e.g. `"10,20,50,60"`
    pub coords: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    Element,
    Map { regions: Vec<Region> },
}

/// Snapshot of the element a tooltip belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: String,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub kind: TargetKind,
}

impl Target {
    #[must_use]
    pub fn element(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alt: None,
            title: None,
            kind: TargetKind::Element,
        }
    }

    #[must_use]
    pub fn map(id: impl Into<String>, regions: Vec<Region>) -> Self {
        Self {
            id: id.into(),
            alt: None,
            title: None,
            kind: TargetKind::Map { regions },
        }
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn is_map(&self) -> bool {
        matches!(self.kind, TargetKind::Map { .. })
    }

    /// Id of the tooltip node owned by this target
    #[must_use]
    pub fn tip_id(&self) -> String {
        format!("{}_tip", self.id)
    }

    /// Areas of a map target; empty for plain elements
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        match &self.kind {
            TargetKind::Map { regions } => regions,
            TargetKind::Element => &[],
        }
    }

    /// The area used for caption and geometry.
    ///
    /// A single area is always used regardless of `index`.
    #[must_use]
    pub fn active_region(&self, index: usize) -> Option<&Region> {
        match self.regions() {
            [only] => Some(only),
            regions => regions.get(index),
        }
    }
}

impl Region {
    #[must_use]
    pub fn new(coords: impl Into<String>) -> Self {
        Self {
            coords: coords.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
