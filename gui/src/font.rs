use u8g2_fonts::{fonts, FontRenderer};

/// Hours, minute counts and both between-lines.
pub fn big() -> FontRenderer {
    FontRenderer::new::<fonts::u8g2_font_fub30_tr>()
}

/// The middle line of a three-line phrase ("over half", "voor").
pub fn small() -> FontRenderer {
    FontRenderer::new::<fonts::u8g2_font_fur20_tr>()
}
