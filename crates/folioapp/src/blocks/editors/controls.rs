//! Editors for the purely structured kinds: divider, button and badge.

use crate::blocks::{
    BadgeBlock, BlockData, BorderStyle, ButtonBlock, ButtonSize, ButtonVariant, DividerBlock,
    Thickness,
};

#[derive(Debug, Clone)]
pub struct DividerEditor {
    data: DividerBlock,
}

impl DividerEditor {
    pub fn new(data: DividerBlock) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &DividerBlock {
        &self.data
    }

    pub fn set_style(&mut self, style: BorderStyle) -> BlockData {
        self.data.border_style = style;
        self.emit()
    }

    pub fn set_thickness(&mut self, thickness: Thickness) -> BlockData {
        self.data.thickness = thickness;
        self.emit()
    }

    pub fn set_color(&mut self, color: &str) -> BlockData {
        self.data.border_color = color.to_string();
        self.emit()
    }

    pub fn sync(&mut self, data: DividerBlock) {
        self.data = data;
    }

    pub fn emit(&self) -> BlockData {
        BlockData::Divider(self.data.clone())
    }
}

#[derive(Debug, Clone)]
pub struct ButtonEditor {
    data: ButtonBlock,
}

impl ButtonEditor {
    pub fn new(data: ButtonBlock) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &ButtonBlock {
        &self.data
    }

    pub fn set_label(&mut self, label: &str) -> BlockData {
        self.data.label = label.to_string();
        self.emit()
    }

    pub fn set_href(&mut self, href: &str) -> BlockData {
        self.data.href = href.to_string();
        self.emit()
    }

    pub fn set_variant(&mut self, variant: ButtonVariant) -> BlockData {
        self.data.variant = variant;
        self.emit()
    }

    pub fn set_size(&mut self, size: ButtonSize) -> BlockData {
        self.data.size = size;
        self.emit()
    }

    pub fn set_color(&mut self, color: &str) -> BlockData {
        self.data.color = color.to_string();
        self.emit()
    }

    pub fn set_radius(&mut self, radius: u32) -> BlockData {
        self.data.border_radius = radius;
        self.emit()
    }

    pub fn sync(&mut self, data: ButtonBlock) {
        self.data = data;
    }

    pub fn emit(&self) -> BlockData {
        BlockData::Button(self.data.clone())
    }
}

#[derive(Debug, Clone)]
pub struct BadgeEditor {
    data: BadgeBlock,
}

impl BadgeEditor {
    pub fn new(data: BadgeBlock) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &BadgeBlock {
        &self.data
    }

    pub fn set_label(&mut self, label: &str) -> BlockData {
        self.data.label = label.to_string();
        self.emit()
    }

    pub fn set_bg_color(&mut self, color: &str) -> BlockData {
        self.data.bg_color = color.to_string();
        self.emit()
    }

    pub fn set_text_color(&mut self, color: &str) -> BlockData {
        self.data.text_color = color.to_string();
        self.emit()
    }

    pub fn set_radius(&mut self, radius: u32) -> BlockData {
        self.data.border_radius = radius;
        self.emit()
    }

    pub fn sync(&mut self, data: BadgeBlock) {
        self.data = data;
    }

    pub fn emit(&self) -> BlockData {
        BlockData::Badge(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edits_spread_previous_fields() {
        let mut editor = ButtonEditor::new(ButtonBlock::default());
        editor.set_href("https://example.com");
        let data = editor.set_size(ButtonSize::Lg);
        match data {
            BlockData::Button(b) => {
                assert_eq!(b.label, "Button");
                assert_eq!(b.href, "https://example.com");
                assert_eq!(b.size, ButtonSize::Lg);
                assert_eq!(b.border_radius, 6);
            }
            other => panic!("expected button, got {:?}", other),
        }
    }

    #[test]
    fn test_divider_controls() {
        let mut editor = DividerEditor::new(DividerBlock::default());
        editor.set_style(BorderStyle::Dashed);
        editor.set_thickness(Thickness::Two);
        assert_eq!(editor.data().border_style, BorderStyle::Dashed);
        assert_eq!(editor.data().thickness, Thickness::Two);
        assert_eq!(editor.data().border_color, "#D9CFC7");
    }

    #[test]
    fn test_badge_colors() {
        let mut editor = BadgeEditor::new(BadgeBlock::default());
        editor.set_bg_color("#000");
        editor.set_text_color("#fff");
        assert_eq!(editor.data().label, "Badge");
        assert_eq!(editor.data().bg_color, "#000");
    }
}
