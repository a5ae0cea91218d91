//! Body-shape knowledge used by the body-type guide.

const GUIDE_RECTANGLE: &str = "**What to Wear (Rectangle/Straight Body):**\n\
**Tops:**\n\
• Peplum tops and ruffled blouses\n\
• Wrap tops that create waist definition\n\
• Embellished or detailed tops\n\
• Crop tops with high-waisted bottoms\n\
\n\
**Bottoms:**\n\
• High-waisted jeans and trousers\n\
• A-line and flared skirts\n\
• Palazzo pants\n\
• Bootcut jeans\n\
\n\
**Dresses:**\n\
• Belted dresses\n\
• Fit-and-flare styles\n\
• Wrap dresses\n\
\n\
**Avoid:** Straight, boxy silhouettes\n\
\n\
";

const GUIDE_HOURGLASS: &str = "**What to Wear (Hourglass Body):**\n\
**Tops:**\n\
• Fitted tops and blouses\n\
• V-neck and scoop neck styles\n\
• Wrap tops\n\
• Anything that emphasizes the waist\n\
\n\
**Bottoms:**\n\
• High-waisted jeans and skirts\n\
• Pencil skirts\n\
• Fitted trousers\n\
• Bodycon styles\n\
\n\
**Dresses:**\n\
• Wrap dresses (perfect!)\n\
• Bodycon dresses\n\
• Belted styles\n\
\n\
**Avoid:** Oversized, shapeless clothing\n\
\n\
";

const GUIDE_PEAR: &str = "**What to Wear (Pear/Triangle Body):**\n\
**Tops:**\n\
• Boat neck and off-shoulder styles\n\
• Bright colors and patterns on top\n\
• Structured shoulders\n\
• Statement sleeves\n\
\n\
**Bottoms:**\n\
• Dark-colored bottoms\n\
• A-line skirts\n\
• Bootcut and wide-leg pants\n\
• Straight-leg jeans\n\
\n\
**Dresses:**\n\
• A-line dresses\n\
• Fit-and-flare styles\n\
• Empire waist dresses\n\
\n\
**Avoid:** Skinny jeans, tight bottoms, pockets on hips\n\
\n\
";

const GUIDE_APPLE: &str = "**What to Wear (Apple/Round Body):**\n\
**Tops:**\n\
• V-neck and deep necklines\n\
• Empire waist tops\n\
• Flowy, draped fabrics\n\
• Tunics\n\
\n\
**Bottoms:**\n\
• Straight-leg pants\n\
• Bootcut jeans\n\
• A-line skirts\n\
• Show off your legs!\n\
\n\
**Dresses:**\n\
• Empire waist dresses\n\
• A-line styles\n\
• Wrap dresses\n\
\n\
**Avoid:** Tight waistbands, clingy fabrics around middle\n\
\n\
";

const GUIDE_INVERTED_TRIANGLE: &str = "**What to Wear (Inverted Triangle Body):**\n\
**Tops:**\n\
• V-neck and scoop neck\n\
• Raglan sleeves\n\
• Simple, minimal tops\n\
• Dark colors on top\n\
\n\
**Bottoms:**\n\
• A-line and flared skirts\n\
• Wide-leg pants\n\
• Detailed or patterned bottoms\n\
• Bright colors on bottom\n\
\n\
**Dresses:**\n\
• A-line dresses\n\
• Fit-and-flare styles\n\
• Wrap dresses\n\
\n\
**Avoid:** Boat neck, shoulder pads, cap sleeves\n\
\n\
";

const GUIDE_FOOTER: &str = "**Pro Styling Tips:**\n\
• Always choose clothes that fit well\n\
• Confidence is your best accessory\n\
• These are guidelines - wear what makes YOU happy!\n\
• Mix and match to find your perfect style 💕";

/// Body shapes the guide knows about, in lookup order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    /// Balanced bust and hips with a defined waist
    Hourglass,
    /// Hips wider than shoulders
    Pear,
    /// Fuller midsection
    Apple,
    /// Straight silhouette
    Rectangle,
    /// Shoulders wider than hips
    InvertedTriangle,
}

impl BodyType {
    /// All shapes, in the order they are matched and listed
    pub const ALL: [BodyType; 5] = [
        BodyType::Hourglass,
        BodyType::Pear,
        BodyType::Apple,
        BodyType::Rectangle,
        BodyType::InvertedTriangle,
    ];

    /// Display name
    pub fn title(self) -> &'static str {
        match self {
            BodyType::Hourglass => "Hourglass",
            BodyType::Pear => "Pear",
            BodyType::Apple => "Apple",
            BodyType::Rectangle => "Rectangle",
            BodyType::InvertedTriangle => "Inverted triangle",
        }
    }

    /// Words that name this shape in a lowercased message
    fn keywords(self) -> &'static [&'static str] {
        match self {
            BodyType::Hourglass => &["hourglass"],
            BodyType::Pear => &["pear"],
            BodyType::Apple => &["apple"],
            BodyType::Rectangle => &["rectangle"],
            BodyType::InvertedTriangle => &["inverted_triangle", "inverted triangle"],
        }
    }

    /// One-line summary of flattering styles
    pub fn styles(self) -> &'static str {
        match self {
            BodyType::Hourglass => {
                "Fitted tops, wrap dresses, high-waisted bottoms, belted outfits, bodycon dresses"
            }
            BodyType::Pear => {
                "A-line skirts, bootcut pants, boat neck tops, structured shoulders, empire waist dresses"
            }
            BodyType::Apple => {
                "Empire waist dresses, V-neck tops, straight-leg pants, flowy fabrics, tunics"
            }
            BodyType::Rectangle => {
                "Peplum tops, ruffled details, layered outfits, belts to create curves, A-line dresses"
            }
            BodyType::InvertedTriangle => {
                "A-line skirts, wide-leg pants, detailed bottoms, simple tops, wrap dresses"
            }
        }
    }

    fn guide(self) -> &'static str {
        match self {
            BodyType::Hourglass => GUIDE_HOURGLASS,
            BodyType::Pear => GUIDE_PEAR,
            BodyType::Apple => GUIDE_APPLE,
            BodyType::Rectangle => GUIDE_RECTANGLE,
            BodyType::InvertedTriangle => GUIDE_INVERTED_TRIANGLE,
        }
    }

    /// First shape named in `msg` (already lowercased)
    pub fn detect(msg: &str) -> Option<BodyType> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.keywords().iter().any(|k| msg.contains(k)))
    }
}

/// Detailed guide for one shape, or an overview of all of them
pub(crate) fn body_type_recommendation(msg: &str) -> String {
    match BodyType::detect(msg) {
        Some(shape) => format!(
            "**{} Body Shape Fashion Guide:**\n\n\
             *Based on our Body Shape Wise Clothes dataset*\n\n\
             **Best Clothing Styles:**\n{}\n\n{}{}",
            shape.title(),
            shape.styles(),
            shape.guide(),
            GUIDE_FOOTER
        ),
        None => {
            let mut out = String::from(
                "**Fashion Recommendations by Body Type:**\n\n\
                 *Based on our comprehensive Body Shape Wise Clothes dataset*\n\n",
            );
            for shape in BodyType::ALL {
                out.push_str(&format!("**{}:** {}\n\n", shape.title(), shape.styles()));
            }
            out.push_str(
                "💡 Ask about a specific body type for detailed recommendations with examples!",
            );
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_first_listed_shape_wins() {
        assert_eq!(BodyType::detect("pear or hourglass?"), Some(BodyType::Hourglass));
        assert_eq!(
            BodyType::detect("inverted triangle body"),
            Some(BodyType::InvertedTriangle)
        );
        assert_eq!(BodyType::detect("no shape here"), None);
    }

    #[test]
    fn test_detailed_guide() {
        let out = body_type_recommendation("my body type is rectangle");
        assert!(out.starts_with("**Rectangle Body Shape Fashion Guide:**"));
        assert!(out.contains("Peplum tops, ruffled details"));
        assert!(out.contains("**Avoid:** Straight, boxy silhouettes"));
        assert!(out.ends_with("Mix and match to find your perfect style 💕"));
    }

    #[test]
    fn test_overview_lists_every_shape() {
        let out = body_type_recommendation("what suits my body type");
        assert!(out.starts_with("**Fashion Recommendations by Body Type:**"));
        for shape in BodyType::ALL {
            assert!(out.contains(&format!("**{}:**", shape.title())));
        }
    }
}
