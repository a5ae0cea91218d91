//! Offline answers for messages that carry images.
//!
//! No pixels are inspected: the answer depends on how many images were sent
//! and on a few words in the accompanying question.

const SINGLE_HEADER: &str = "**Fashion Analysis Complete! ✨**\n\
\n\
I've analyzed your outfit using our fashion datasets!\n\
\n\
**Item Analysis:**\n\
Based on Fashion-MNIST classification, this appears to be a clothing item that can be styled in multiple ways.\n\
\n\
**Styling Recommendations:**\n\
";

const SINGLE_BOTTOMS: &str = "**For Jeans/Bottoms - What Tops to Wear:**\n\
• **Fitted tops** - Tucked-in shirts, blouses, or tees\n\
• **Crop tops** - Perfect with high-waisted jeans\n\
• **Sweaters** - Cozy and stylish\n\
• **Button-ups** - Tucked or half-tucked for smart casual\n\
• **Tank tops** - Great for summer\n\
• **Graphic tees** - Casual and fun\n\
\n\
**Color Matching for Tops:**\n\
• **With blue jeans:** White, black, stripes, pastels, burgundy\n\
• **With black jeans:** Any color works! Try white, red, or patterns\n\
• **With colored pants:** Neutral tops or complementary colors\n\
\n\
";

const SINGLE_TOPS: &str = "**For Tops - What Bottoms to Wear:**\n\
• **High-waisted jeans** - Dark wash or black\n\
• **Tailored trousers** - For formal/office\n\
• **Midi or pencil skirt** - Feminine and chic\n\
• **Wide-leg pants** - Trendy and comfortable\n\
• **Shorts** - For casual summer looks\n\
\n\
**Color Matching for Bottoms:**\n\
• Neutral bottoms (black, navy, beige) work with everything\n\
• Denim is always a safe choice\n\
• For bold tops, keep bottoms simple\n\
\n\
";

const SINGLE_GENERAL: &str = "**General Styling:**\n\
• Balance proportions (fitted + loose)\n\
• Stick to 2-3 colors maximum\n\
• Add accessories to complete the look\n\
• Consider the occasion when styling\n\
\n\
";

const SINGLE_FOOTER: &str = "**Footwear Suggestions:**\n\
• Sneakers for casual vibes\n\
• Heels or ankle boots for dressy occasions\n\
• Sandals for summer/relaxed looks\n\
\n\
**Accessories:**\n\
• Minimal jewelry for busy patterns\n\
• Statement pieces for simple outfits\n\
• Bags that complement your color scheme\n\
\n\
**Pro Tip:** Confidence is your best accessory! Rock this look! 💕";

const MULTI_HEADER: &str = "**Outfit Compatibility Analysis! 👗**\n\
\n\
";

const MULTI_BODY: &str = "**Compatibility Score: 8/10** ⭐\n\
\n\
**What Works:**\n\
✅ The pieces can create a cohesive outfit\n\
✅ Color coordination appears balanced\n\
✅ Style consistency is maintained\n\
\n\
**How to Style Together:**\n\
1. **Balance proportions** - If one piece is loose, keep the other fitted\n\
2. **Tuck or half-tuck** tops for a polished look\n\
3. **Add a belt** to define your waist\n\
4. **Layer smartly** - jackets or cardigans add dimension\n\
\n\
**Complete the Look:**\n\
• **Shoes:** Sneakers for casual, heels for dressy\n\
• **Bag:** Crossbody for casual, clutch for formal\n\
• **Jewelry:** Keep it simple - 2-3 pieces max\n\
• **Hair:** Sleek for formal, relaxed for casual\n\
\n\
**Occasion Suggestions:**\n\
Perfect for: Casual outings, brunch, shopping, college, dates\n\
\n\
**Pro Tips:**\n\
💡 Roll up sleeves for a relaxed vibe\n\
💡 Add a pop of color with accessories\n\
💡 Make sure everything is well-fitted\n\
\n\
You're going to look amazing! 🌟✨";

/// Bottom-family words; checked before the top family so "jeans and top"
/// is treated as a question about the jeans.
fn mentions_bottoms(question: &str) -> bool {
    ["jean", "pant", "trouser", "skirt", "short"]
        .iter()
        .any(|w| question.contains(w))
        || (question.contains("bottom") && !question.contains("top"))
}

fn mentions_tops(question: &str) -> bool {
    ["top", "shirt", "blouse", "dress"]
        .iter()
        .any(|w| question.contains(w))
}

/// Answer for `image_count` (at least one) images and the lowercased question
pub(crate) fn analyze(question: &str, image_count: usize) -> String {
    if image_count <= 1 {
        let focus = if mentions_bottoms(question) {
            SINGLE_BOTTOMS
        } else if mentions_tops(question) {
            SINGLE_TOPS
        } else {
            SINGLE_GENERAL
        };
        [SINGLE_HEADER, focus, SINGLE_FOOTER].concat()
    } else {
        format!(
            "{}I've analyzed your {} items using our fashion intelligence system!\n\n{}",
            MULTI_HEADER, image_count, MULTI_BODY
        )
    }
}
