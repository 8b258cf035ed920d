use crate::blocks::{Align, BlockData, ImageBlock, ImageSize};

/// Image editor. The broken flag is render state: it records a load failure
/// for the current URL and never touches the stored block.
#[derive(Debug, Clone)]
pub struct ImageEditor {
    data: ImageBlock,
    broken: bool,
}

impl ImageEditor {
    pub fn new(data: ImageBlock) -> Self {
        Self { data, broken: false }
    }

    pub fn data(&self) -> &ImageBlock {
        &self.data
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }

    pub fn set_url(&mut self, url: &str) -> BlockData {
        if self.data.url != url {
            self.broken = false;
        }
        self.data.url = url.to_string();
        self.emit()
    }

    pub fn set_caption(&mut self, caption: &str) -> BlockData {
        self.data.caption = caption.to_string();
        self.emit()
    }

    pub fn set_size(&mut self, size: ImageSize) -> BlockData {
        self.data.size = size;
        self.emit()
    }

    pub fn set_align(&mut self, align: Align) -> BlockData {
        self.data.align = align;
        self.emit()
    }

    /// The host failed to load the image.
    pub fn mark_broken(&mut self) {
        self.broken = true;
    }

    pub fn sync(&mut self, data: ImageBlock) {
        if self.data.url != data.url {
            self.broken = false;
        }
        self.data = data;
    }

    pub fn emit(&self) -> BlockData {
        BlockData::Image(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_flag_does_not_touch_url() {
        let mut editor = ImageEditor::new(ImageBlock::default());
        editor.set_url("https://example.com/missing.png");
        editor.mark_broken();
        assert!(editor.is_broken());
        assert_eq!(editor.data().url, "https://example.com/missing.png");
    }

    #[test]
    fn test_new_url_clears_broken_flag() {
        let mut editor = ImageEditor::new(ImageBlock::default());
        editor.set_url("a.png");
        editor.mark_broken();
        editor.set_caption("still broken");
        assert!(editor.is_broken());
        editor.set_url("b.png");
        assert!(!editor.is_broken());
    }
}
