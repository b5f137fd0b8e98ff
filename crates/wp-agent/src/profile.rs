//! Static per-agent configuration: name, quote lines, visibility.

/// The world the scene is currently shown in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    #[default]
    Normal,
    UpsideDown,
}

impl Dimension {
    pub fn toggled(self) -> Dimension {
        match self {
            Dimension::Normal     => Dimension::UpsideDown,
            Dimension::UpsideDown => Dimension::Normal,
        }
    }
}

/// In which dimensions an agent is drawn.  Hidden agents keep moving.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Visibility {
    #[default]
    Always,
    UpsideDownOnly,
}

impl Visibility {
    #[inline]
    pub fn is_visible_in(self, dim: Dimension) -> bool {
        match self {
            Visibility::Always         => true,
            Visibility::UpsideDownOnly => dim == Dimension::UpsideDown,
        }
    }
}

/// Lines an agent may say.  An empty pool means the agent never speaks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QuotePool(Vec<String>);

impl QuotePool {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QuotePool(lines.into_iter().map(Into::into).collect())
    }

    pub fn empty() -> Self {
        QuotePool(Vec::new())
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything about an agent that does not change while it runs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentProfile {
    /// Character name; also selects the sprite in the rendering layer.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub quotes: QuotePool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility: Visibility,
}

impl AgentProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            quotes:     QuotePool::empty(),
            visibility: Visibility::Always,
        }
    }

    pub fn with_quotes(mut self, quotes: QuotePool) -> Self {
        self.quotes = quotes;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}
