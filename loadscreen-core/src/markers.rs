//! Fixed set of progress markers (the thumbnail strip).

/// Number of markers in the strip. Never changes after construction.
pub const MARKER_COUNT: usize = 8;

/// Opacity of a marker at or below the active index.
pub const EMPHASIZED_OPACITY: f32 = 1.0;

/// Opacity of a marker above the active index.
pub const DIM_OPACITY: f32 = 0.3;

/// Highlight state of a single marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emphasis {
    #[default]
    Dim,
    Emphasized,
}

impl Emphasis {
    pub fn opacity(self) -> f32 {
        match self {
            Emphasis::Dim => DIM_OPACITY,
            Emphasis::Emphasized => EMPHASIZED_OPACITY,
        }
    }

    pub fn is_emphasized(self) -> bool {
        self == Emphasis::Emphasized
    }
}

/// Ordered markers, all dim until the first progress update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerSet {
    markers: [Emphasis; MARKER_COUNT],
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Emphasis> {
        self.markers.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Emphasis> + '_ {
        self.markers.iter().copied()
    }

    /// Re-derive every marker from the active index in a single pass.
    ///
    /// `None` leaves every marker dim.
    pub fn apply_active(&mut self, active: Option<usize>) {
        for (i, marker) in self.markers.iter_mut().enumerate() {
            *marker = match active {
                Some(a) if i <= a => Emphasis::Emphasized,
                _ => Emphasis::Dim,
            };
        }
    }

    pub fn opacities(&self) -> [f32; MARKER_COUNT] {
        self.markers.map(Emphasis::opacity)
    }
}
