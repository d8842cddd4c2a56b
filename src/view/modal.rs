/// Single-slot overlay state. Opening while already open replaces the content,
/// there is never a stack of modals.
#[derive(Debug, Clone)]
pub struct Modal<T> {
    content: Option<T>,
    pub config: ModalConfig,
}

/// Configuration for modal behavior
#[derive(Debug, Clone, Copy)]
pub struct ModalConfig {
    /// Whether to show a dark overlay behind the modal
    pub show_overlay: bool,
    /// Whether clicking the overlay outside the content closes it
    pub close_on_outside_click: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { show_overlay: true, close_on_outside_click: true }
    }
}

/// Where a click inside an open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    /// The enlarged content itself. Propagation stops here.
    Content,
    CloseButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult<T> {
    Closed(T),
    Ignored,
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self { content: None, config: ModalConfig::default() }
    }
}

impl<T> Modal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ModalConfig) -> Self {
        self.config = config;
        self
    }

    /// Shows `content`, returning whatever was shown before.
    pub fn open(&mut self, content: T) -> Option<T> {
        self.content.replace(content)
    }

    pub fn close(&mut self) -> Option<T> {
        self.content.take()
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn handle_click(&mut self, target: ClickTarget) -> ModalResult<T> {
        let closes = match target {
            ClickTarget::CloseButton => true,
            ClickTarget::Backdrop => self.config.close_on_outside_click,
            ClickTarget::Content => false,
        };

        if closes {
            if let Some(content) = self.content.take() {
                return ModalResult::Closed(content);
            }
        }
        ModalResult::Ignored
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnlargedImage {
    pub src: String,
    pub alt: String,
}

impl EnlargedImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into() }
    }
}

pub type ImageModal = Modal<EnlargedImage>;
