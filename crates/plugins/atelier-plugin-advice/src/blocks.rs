//! Canned advice blocks returned verbatim (or stitched together) by the
//! keyword rules.

// Occasion and mood blocks

/// Cute and adorable looks
pub const CUTE: &str = "**Cute Outfit Recommendations! 🎀**\n\
\n\
Aww, let's make you look absolutely adorable!\n\
\n\
**Cute Casual Looks:**\n\
• Pastel sweater + high-waisted jeans + white sneakers\n\
• Floral mini dress + denim jacket + ankle boots\n\
• Oversized hoodie + bike shorts + chunky sneakers\n\
• Crop top + pleated skirt + Mary Jane shoes\n\
\n\
**Cute Date Night:**\n\
• Off-shoulder top + midi skirt + heeled sandals\n\
• Fit-and-flare dress in soft pink or lavender\n\
• Ruffled blouse + high-waisted trousers + ballet flats\n\
\n\
**Styling Tips:**\n\
• Colors: pastels, soft pinks, baby blues, lavender, white\n\
• Add cute accessories: hair clips, delicate jewelry, small bags\n\
• Patterns: florals, polka dots, gingham, hearts\n\
• Keep makeup fresh and natural with a pop of pink!\n\
\n\
You're going to look SO cute! 💕✨";

pub const ELEGANT: &str = "**Elegant & Sophisticated Looks! ✨**\n\
\n\
Let's create a timeless, classy look:\n\
\n\
**Elegant Essentials:**\n\
• Tailored blazer + silk blouse + straight-leg trousers\n\
• Little black dress + pearl necklace + classic pumps\n\
• Midi wrap dress in solid color + pointed-toe heels\n\
• Cashmere sweater + pencil skirt + ankle boots\n\
\n\
**Color Palette:**\n\
• Black, navy, burgundy, emerald, cream, camel\n\
• Stick to solid colors or subtle patterns\n\
\n\
**Styling Secrets:**\n\
• Quality over quantity - invest in timeless pieces\n\
• Minimal, refined jewelry (pearls, gold, silver)\n\
• Structured bags and classic shoes\n\
• Hair sleek and polished, makeup understated\n\
\n\
Elegance is an attitude! 👑";

pub const CASUAL: &str = "**Casual & Comfy Outfit Ideas! 👟**\n\
\n\
Let's keep it relaxed and stylish:\n\
\n\
**Everyday Casual:**\n\
• T-shirt + jeans + sneakers (classic combo!)\n\
• Hoodie + joggers + slip-on shoes\n\
• Casual dress + denim jacket + sandals\n\
• Button-up shirt + shorts + canvas shoes\n\
\n\
**Elevated Casual:**\n\
• Nice sweater + dark jeans + ankle boots\n\
• Blouse + trousers + loafers\n\
• Midi dress + cardigan + sneakers\n\
\n\
**Pro Tips:**\n\
• Comfort is key - choose breathable fabrics\n\
• Add one statement piece (cool jacket, fun bag)\n\
• Keep it simple but put-together\n\
\n\
Casual doesn't mean boring! 😎";

pub const PARTY: &str = "**Party & Night Out Looks! 🎉**\n\
\n\
Time to turn heads!\n\
\n\
**Party Perfect:**\n\
• Sequin dress + strappy heels + clutch\n\
• Bodycon dress + statement jewelry + pumps\n\
• Crop top + leather pants + heeled boots\n\
• Satin slip dress + blazer + heels\n\
\n\
**Colors That Pop:**\n\
• Metallics (gold, silver), black, red, electric blue\n\
• Don't be afraid to sparkle! ✨\n\
\n\
**Styling Tips:**\n\
• Go bold with makeup - smokey eyes or red lips\n\
• Statement earrings or a bold necklace\n\
• Comfortable heels (you'll be dancing!)\n\
• Small bag - just essentials\n\
\n\
Dance the night away! 💃🔥";

pub const WEDDING: &str = "**Wedding Guest Outfit Ideas! 💒**\n\
\n\
Let's make you look stunning!\n\
\n\
**Indian Wedding:**\n\
• Anarkali suit in jewel tones (emerald, ruby, sapphire)\n\
• Saree with elegant blouse + statement jewelry\n\
• Lehenga with crop top + dupatta\n\
• Indo-western gown with embroidery\n\
\n\
**Western Wedding:**\n\
• Midi or maxi dress (avoid white!)\n\
• Cocktail dress in burgundy, navy, or pastels\n\
• Elegant jumpsuit with heels\n\
\n\
**Styling Tips:**\n\
• Colors: burgundy, emerald, gold, navy, pastels\n\
• Add statement jewelry but don't overdo it\n\
• Comfortable heels (you'll be standing a lot!)\n\
• Clutch or small elegant bag\n\
\n\
You'll look amazing! 💕✨";

pub const COLLEGE: &str = "**College Outfit Ideas! 📚**\n\
\n\
Stylish + Comfortable = Perfect!\n\
\n\
**Casual College Looks:**\n\
• Oversized hoodie + jeans + sneakers\n\
• Graphic tee + mom jeans + canvas shoes\n\
• Sweater + leggings + ankle boots\n\
• Shirt + shorts + slip-ons\n\
\n\
**Slightly Dressed Up:**\n\
• Nice top + trousers + loafers\n\
• Casual dress + denim jacket + sneakers\n\
• Blouse + jeans + ballet flats\n\
\n\
**Pro Tips:**\n\
• Comfort is key - you're walking around campus!\n\
• Backpack or tote bag for books\n\
• Layer for temperature changes\n\
• Keep it simple but express yourself!\n\
\n\
Rock that campus style! 🎓✨";

pub const INTERVIEW: &str = "**Professional Interview Outfit! 💼**\n\
\n\
First impressions matter!\n\
\n\
**Classic Professional:**\n\
• Blazer + blouse + tailored trousers + closed-toe heels\n\
• Shift dress + blazer + pumps\n\
• Button-up shirt + pencil skirt + flats\n\
• Formal kurta + palazzo + minimal jewelry\n\
\n\
**Colors:**\n\
• Navy, black, gray, white, beige\n\
• Avoid bright colors or loud patterns\n\
\n\
**Styling Rules:**\n\
• Keep jewelry minimal and professional\n\
• Closed-toe shoes (no sandals)\n\
• Neat hair, subtle makeup\n\
• Structured bag or portfolio\n\
• Make sure clothes are ironed!\n\
\n\
You've got this! Good luck! 🌟";

pub const MUSIC_FESTIVAL: &str = "**Music Festival Outfit! 🎵**\n\
\n\
Let's create that festival vibe!\n\
\n\
**Festival Essentials:**\n\
• Crop top + high-waisted shorts + boots\n\
• Flowy dress + denim jacket + sneakers\n\
• Band tee + ripped jeans + combat boots\n\
• Romper + cardigan + sandals\n\
\n\
**Accessories:**\n\
• Sunglasses (a must!)\n\
• Crossbody bag or fanny pack\n\
• Bandana or hat\n\
• Layered jewelry\n\
\n\
**Pro Tips:**\n\
• Comfortable shoes (you'll be standing/dancing!)\n\
• Layer for weather changes\n\
• Bring a light jacket\n\
• Go bold with colors and patterns!\n\
\n\
Have an amazing time! 🎉🎸";

/// Diwali and other traditional celebrations
pub const FESTIVE: &str = "**Traditional Festive Outfit! 🪔**\n\
\n\
Celebrate in style!\n\
\n\
**Light & Comfortable:**\n\
• Anarkali suit in lighter fabrics (georgette, chiffon)\n\
• Straight-cut kurta + palazzo + dupatta\n\
• Saree in soft silk or cotton silk\n\
• Indo-western dress with ethnic prints\n\
\n\
**Colors for Festivals:**\n\
• Bright colors: red, orange, pink, yellow, green\n\
• Gold accents always work!\n\
\n\
**Styling:**\n\
• Statement earrings + bangles\n\
• Bindi for traditional touch\n\
• Juttis or ethnic sandals\n\
• Small potli bag or clutch\n\
• Keep it comfortable - you'll be celebrating!\n\
\n\
Happy festivities! ✨🎊";

pub const BEACH: &str = "**Beach Vacation Outfits! 🏖️**\n\
\n\
Pack smart, look fabulous!\n\
\n\
**Beach Essentials:**\n\
• Swimsuit + cover-up/kaftan + sandals\n\
• Sundress + sun hat + sunglasses\n\
• Shorts + tank top + flip-flops\n\
• Maxi dress + denim jacket + sandals\n\
\n\
**Evening Beach Look:**\n\
• Flowy dress + wedges\n\
• Linen pants + nice top + sandals\n\
\n\
**Don't Forget:**\n\
• Sunglasses (protect those eyes!)\n\
• Sun hat or cap\n\
• Beach bag\n\
• Light layers for evening\n\
• Comfortable walking sandals\n\
\n\
Have an amazing vacation! 🌴☀️";

pub const WINTER: &str = "**Winter Fashion! ❄️**\n\
\n\
Stay warm AND stylish!\n\
\n\
**Cozy Winter Looks:**\n\
• Sweater + jeans + ankle boots + coat\n\
• Turtleneck + midi skirt + tights + boots\n\
• Hoodie + joggers + puffer jacket + sneakers\n\
• Long coat + dress + boots + scarf\n\
\n\
**Layering Tips:**\n\
• Base layer + sweater + coat\n\
• Add scarves, beanies, gloves\n\
• Thermal leggings under pants\n\
• Wool or fleece fabrics\n\
\n\
**Winter Colors:**\n\
• Burgundy, forest green, navy, camel, black\n\
• Earth tones and jewel tones\n\
\n\
Stay cozy! 🧣☕";

pub const FIND_STYLE: &str = "**Finding Your Fashion Style! ✨**\n\
\n\
Let's discover what makes you feel amazing!\n\
\n\
**Popular Style Types:**\n\
\n\
**Minimalist:** Clean lines, neutral colors, simple silhouettes\n\
**Bohemian:** Flowy fabrics, earthy tones, layered jewelry\n\
**Streetwear:** Oversized fits, sneakers, graphic tees, hoodies\n\
**Classic:** Timeless pieces, tailored fits, quality basics\n\
**Romantic:** Soft colors, ruffles, lace, feminine details\n\
**Edgy:** Leather, dark colors, bold accessories, boots\n\
\n\
**How to Find Yours:**\n\
• Look at your favorite outfits - what do they have in common?\n\
• Save fashion inspiration on Pinterest\n\
• Try different styles and see what feels right\n\
• Mix styles - you don't have to pick just one!\n\
\n\
Your style is uniquely YOU! 💕";

pub const BUDGET: &str = "**Budget-Friendly Fashion! 💰**\n\
\n\
Look expensive without breaking the bank!\n\
\n\
**Smart Shopping Tips:**\n\
• Invest in basics: white tee, black jeans, neutral shoes\n\
• Thrift stores have hidden gems!\n\
• Buy versatile pieces you can style multiple ways\n\
• Quality over quantity for key items\n\
• Wait for sales and discounts\n\
\n\
**Affordable Brands:**\n\
• H&M, Zara, Forever 21, Uniqlo\n\
• Local markets and street shopping\n\
• Online: Myntra, Ajio, Shein (check reviews!)\n\
\n\
**Style on Budget:**\n\
• Accessories transform basic outfits\n\
• Learn to mix and match\n\
• Take care of your clothes - they'll last longer!\n\
\n\
Fashion doesn't have to be expensive! 🌟";

pub const CAPSULE_WARDROBE: &str = "**Capsule Wardrobe Essentials! 👔**\n\
\n\
Build a versatile wardrobe with these:\n\
\n\
**Tops (5-7):**\n\
• White t-shirt, black t-shirt\n\
• White button-up shirt\n\
• Neutral sweater\n\
• One blouse\n\
\n\
**Bottoms (4-5):**\n\
• Dark jeans, black jeans\n\
• Black trousers\n\
• One skirt\n\
\n\
**Outerwear (2-3):**\n\
• Denim jacket\n\
• Blazer\n\
• Coat\n\
\n\
**Shoes (3-4):**\n\
• White sneakers\n\
• Black heels/flats\n\
• Boots\n\
\n\
Mix and match = 100+ outfits! ✨";

pub const CONFIDENT: &str = "**Confident & Bold Looks! 💪**\n\
\n\
Own the room!\n\
\n\
**Power Outfits:**\n\
• Tailored blazer + fitted pants + heels (boss energy)\n\
• All black outfit + red lips + statement jewelry\n\
• Leather jacket + boots + dark jeans\n\
• Monochrome suit + sleek hair\n\
\n\
**Bold Colors:**\n\
• Red, burgundy, emerald, royal blue\n\
• All black or all white\n\
\n\
**Confidence Tips:**\n\
• Wear clothes that FIT well\n\
• Stand tall, shoulders back\n\
• Add one statement piece\n\
• Your attitude is your best accessory!\n\
\n\
You've got this! 👑🔥";

// Single garments

pub const WHITE_SHIRT: &str = "**Styling a White Shirt! 👔**\n\
\n\
The most versatile piece ever!\n\
\n\
**5 Ways to Style:**\n\
1. **Classic:** Tucked into jeans + blazer + heels\n\
2. **Casual:** Half-tucked into shorts + sneakers\n\
3. **Edgy:** Tied at waist + leather pants + boots\n\
4. **Layered:** Under sweater + collar out + trousers\n\
5. **Chic:** Oversized as dress + belt + ankle boots\n\
\n\
One shirt, endless possibilities! ✨";

pub const LEATHER_JACKET: &str = "**Leather Jacket Styling! 🧥**\n\
\n\
**Perfect Combos:**\n\
• Dress + leather jacket + ankle boots (edgy feminine)\n\
• White tee + jeans + leather jacket (classic cool)\n\
• Hoodie + leather jacket + joggers (streetwear)\n\
• Graphic tee + skirt + leather jacket (rocker chic)\n\
\n\
Instant edge to any outfit! 🔥";

pub const FLARED_JEANS: &str = "**Flared Jeans Styling! 👖**\n\
\n\
**How to Rock Them:**\n\
• Fitted crop top + flared jeans + heels (70s vibes)\n\
• Tucked-in blouse + flared jeans + boots\n\
• Bodysuit + flared jeans + platform shoes\n\
\n\
**Pro Tips:**\n\
• Wear heels or platforms to elongate legs\n\
• Keep tops fitted to balance the flare\n\
• High-waisted styles are most flattering\n\
\n\
Retro and fabulous! ✨";

// Colour matching

pub const COLOR_HEADER: &str = "**Color Matching Guide! 🎨**\n\
\n\
";

pub const COLOR_PINK: &str = "**Pink pairs beautifully with:**\n\
• Black jeans - YES! Classic combo\n\
• White, gray, navy, beige\n\
• Denim (any shade)\n\
• Gold accessories\n\
\n\
";

pub const COLOR_NAVY: &str = "**Navy/Blue goes great with:**\n\
• White, beige, cream\n\
• Gold, brown, tan\n\
• Red for bold look\n\
• Nude or metallic shoes\n\
\n\
";

pub const COLOR_UNIVERSAL: &str = "**Universal Color Rules:**\n\
• Black goes with everything\n\
• White is universally flattering\n\
• Denim pairs with most colors\n\
• Neutrals (beige, gray, brown) are safe bets\n\
• Complementary colors: red-green, blue-orange, purple-yellow\n\
\n\
";

pub const COLOR_FOOTER: &str = "**Pro Tip:** When in doubt, stick to neutrals or monochrome! 💕";

// Date night

pub const DATE_HEADER: &str = "**Date Night Outfit Ideas! 💕**\n\
\n\
Ooh, exciting! Let me help you look absolutely stunning:\n\
\n\
";

pub const DATE_CUTE_MYSTERIOUS: &str = "**For a Cute & Mysterious Vibe:**\n\
• Little black dress with a subtle slit - classic and alluring\n\
• Off-shoulder top with high-waisted jeans - effortlessly chic\n\
• Midi dress in burgundy or deep blue - sophisticated mystery\n\
• Fitted blazer over a silk cami with tailored pants - boss energy\n\
\n\
**Styling Secrets:**\n\
• Keep makeup soft but defined (smokey eyes work magic!)\n\
• Add delicate jewelry - less is more\n\
• Wear heels or ankle boots for confidence\n\
• A subtle perfume is your secret weapon\n\
• Confidence is your best accessory! 💋\n\
\n\
";

pub const DATE_GENERAL: &str = "**Date Night Essentials:**\n\
• Something that makes YOU feel confident\n\
• Colors: burgundy, black, navy, or emerald green\n\
• Fitted but comfortable (you want to enjoy yourself!)\n\
• A pop of personality - your style, your rules!\n\
\n\
";

pub const DATE_FOOTER: &str = "**Pro Tip:** Wear something you can move in - you might be dancing! 💃";

// Skin tone

pub const SKIN_TONE_HEADER: &str = "**Colors for Your Skin Tone! 🎨**\n\
\n\
";

pub const SKIN_TONE_WARM: &str = "**Warm Skin Tones:**\n\
• Best colors: Earth tones, warm reds, oranges, yellows\n\
• Greens: Olive, moss, forest green\n\
• Browns, camel, rust, coral, peach\n\
• Gold jewelry looks amazing!\n\
\n\
**Avoid:** Icy colors, pure white, cool blues\n\
";

pub const SKIN_TONE_COOL: &str = "**Cool Skin Tones:**\n\
• Best colors: Jewel tones, cool blues, purples\n\
• Pink, burgundy, emerald, sapphire\n\
• True white, black, navy, gray\n\
• Silver jewelry is your friend!\n\
\n\
**Avoid:** Orange, warm yellows, browns\n\
";

pub const SKIN_TONE_TEST: &str = "**Quick Test:**\n\
• Look at your wrist veins:\n\
\x20 - Green veins = Warm undertone\n\
\x20 - Blue/purple veins = Cool undertone\n\
\x20 - Both = Neutral (lucky you!)\n\
\n\
**Neutral skin:** Can wear most colors! 🌟\n\
";

// Body shape and height tips

pub const BODY_TIPS_HEADER: &str = "**Body Type Styling Tips! 👗**\n\
\n\
";

pub const BODY_TIPS_PEAR: &str = "**Pear Shape (Smaller top, fuller bottom):**\n\
• Tops: Boat neck, off-shoulder, bright colors\n\
• Bottoms: Dark colors, A-line skirts, bootcut jeans\n\
• Draw attention up with statement necklaces\n\
• Avoid: Skinny jeans, tight bottoms\n\
";

pub const BODY_TIPS_APPLE: &str = "**Apple Shape (Fuller middle):**\n\
• Tops: V-neck, empire waist, flowy fabrics\n\
• Bottoms: Show off those legs! Shorts, skirts\n\
• Avoid tight waistbands\n\
• Vertical lines elongate your torso\n\
";

pub const BODY_TIPS_BROAD_SHOULDERS: &str = "**Broad Shoulders:**\n\
• Tops: V-neck, scoop neck, raglan sleeves\n\
• Avoid: Boat neck, shoulder pads, cap sleeves\n\
• Balance with A-line skirts or wide-leg pants\n\
• Draw attention to your waist with belts\n\
";

pub const BODY_TIPS_SHORT: &str = "**Petite/Short Height:**\n\
• High-waisted everything (elongates legs!)\n\
• Monochrome outfits create long lines\n\
• Cropped jackets, fitted clothes\n\
• Heels or pointed-toe shoes\n\
• Avoid: Oversized clothes, long skirts\n\
";

pub const BODY_TIPS_TALL: &str = "**Tall Height:**\n\
• You can rock almost anything!\n\
• Maxi dresses, wide-leg pants look amazing\n\
• Horizontal stripes, color blocking\n\
• Crop tops, high-low hems\n\
• Own your height with confidence! 👑\n\
";

// Trends

pub const TRENDS_HEADER: &str = "**Current Fashion Trends! 🔥**\n\
\n\
";

pub const TRENDS_KPOP: &str = "**K-Pop Idol Style:**\n\
• Oversized hoodies + bike shorts + chunky sneakers\n\
• Crop tops + high-waisted pants + platform shoes\n\
• Layered streetwear with bold accessories\n\
• Mix feminine and edgy pieces\n\
• Bright colors, patterns, statement pieces\n\
• Bucket hats, chains, colorful hair accessories\n\
\n\
";

pub const TRENDS_CURRENT: &str = "**2025 Trends:**\n\
• Y2K revival: Low-rise jeans, baby tees\n\
• Oversized blazers and tailored pieces\n\
• Cargo pants (yes, they're back!)\n\
• Monochrome outfits\n\
• Sustainable fashion\n\
• Bold colors and prints\n\
• Platform shoes\n\
\n\
";

pub const TRENDS_FOOTER: &str = "But remember: Wear what makes YOU feel good! 💕";

// Mini skirts

pub const MINI_SKIRT_HEADER: &str = "**Mini Skirt Magic! ✨**\n\
\n\
";

pub const MINI_SKIRT_RECTANGLE: &str = "Absolutely YES! Mini skirts look amazing on rectangle body shapes!\n\
\n\
**Your Best Styles:**\n\
• A-line or flared minis - create beautiful curves\n\
• Pleated or ruffled styles - add dimension\n\
• High-waisted designs - define that waist!\n\
\n\
**Styling Like a Pro:**\n\
• Tuck in fitted tops or rock a crop top\n\
• Add a belt to create curves\n\
• Heels or ankle boots elongate your legs\n\
• Layer with a fitted jacket for edge\n\
\n\
Rock it with confidence! 💪";

pub const MINI_SKIRT_GENERAL: &str = "Mini skirts are for EVERYONE! Here's how to style them:\n\
\n\
**Universal Tips:**\n\
• High-waisted = universally flattering\n\
• A-line cuts work for most body shapes\n\
• Balance with fitted tops\n\
• Add tights for versatility\n\
• Choose your comfort length\n\
\n\
Your body, your rules! Wear what makes you feel amazing! 🌟";

// Generic garment analysis

/// Prefix shared by the bottoms, tops and help blocks
pub const ANALYSIS_HEADER: &str = "**Fashion Analysis:**\n\
\n\
";

pub const BOTTOMS: &str = "**For this bottom, here are my recommendations:**\n\
\n\
**Best Top Matches:**\n\
• Fitted crop tops or tucked-in shirts\n\
• Casual t-shirts or tank tops\n\
• Blouses (tucked or half-tucked)\n\
• Sweaters or cardigans\n\
• Button-down shirts\n\
\n\
**Color Combinations:**\n\
For blue jeans/denim:\n\
• White tops for a classic look\n\
• Black for sophistication\n\
• Burgundy or maroon for richness\n\
• Pastels for a soft look\n\
• Stripes or patterns work great\n\
\n\
**Styling Tips:**\n\
• Tuck in your top to define your waist\n\
• Add a belt for extra style\n\
• Sneakers for casual, heels for dressy\n\
• Layer with jackets or blazers\n\
• Accessorize with statement jewelry\n\
\n\
**Body Types:**\n\
Jeans work for all body types! Choose high-waisted for pear shapes, straight-leg for rectangles!";

pub const TOPS: &str = "**For this top, here are my recommendations:**\n\
\n\
**Best Bottom Matches:**\n\
• High-waisted jeans (dark wash or black)\n\
• Tailored trousers in neutral colors\n\
• A-line midi skirt\n\
• Pencil skirt for formal occasions\n\
\n\
**Color Combinations:**\n\
If it's a burgundy/maroon top:\n\
• Beige or cream bottoms for elegance\n\
• Black for a classic look\n\
• Navy blue for sophistication\n\
• Gray for a modern feel\n\
\n\
**Styling Tips:**\n\
• Add gold jewelry for warmth\n\
• Nude or black heels work perfectly\n\
• Keep accessories minimal if the top is embellished\n\
• Great for evening events or formal occasions\n\
\n\
**Body Types:**\n\
";

pub const OUTFIT_MATCHING: &str = "**I can see you're asking about outfit matching! 👗**\n\
\n\
While I'm processing your images, let me give you some quick tips:\n\
\n\
**General Outfit Matching Rules:**\n\
✨ **Colors:** Stick to 2-3 colors max for a cohesive look\n\
🎨 **Neutrals:** Black, white, beige, navy go with everything\n\
👔 **Balance:** If top is busy, keep bottom simple (and vice versa)\n\
👠 **Proportions:** Fitted top + loose bottom OR loose top + fitted bottom\n\
\n\
**Quick Check:**\n\
• Do the colors complement each other?\n\
• Is there a good balance of fitted vs loose?\n\
• Does the style match (casual with casual, formal with formal)?\n\
\n\
**Describe your outfit** and I'll give you specific advice! 💕";

/// Generic help shown when nothing else matches
pub const HELP: &str = "**I'm here to help you look fabulous! ✨**\n\
\n\
Here's what we can do together:\n\
\n\
📸 **Upload pics** and ask 'What goes with this?'\n\
💬 **Ask me anything** like 'What should I wear on a date?'\n\
👗 **Body type advice** - 'What looks good on my body shape?'\n\
🎨 **Color matching** - 'What colors go with burgundy?'\n\
✨ **Style tips** - 'How to look cute and mysterious?'\n\
\n\
I'm your fashion bestie - no question is too small! Let's make you shine! 💕";
