use crate::models::{EnhancementMode, UpscaleLevel};

const LANDSCAPE_PROMPT: &str = "\
Enhance landscape image clarity and sharpness.
Increase fine details in distant objects such as buildings, trees, mountains, and clouds.
Improve micro-contrast and edge definition while keeping natural colors.
Avoid over-sharpening, halos, or artificial textures.
Preserve realistic lighting and atmosphere.
Negative prompt: over-sharpening, noise, halos, artifacts, unrealistic colors, oversaturated sky.";

const PORTRAIT_PROMPT: &str = "\
Enhance portrait image with natural skin preservation.
Sharpen eyes, eyelashes, eyebrows, lips, and hair details.
Maintain smooth and realistic skin texture.
Avoid skin over-smoothing or excessive sharpening.
Keep natural skin tones and facial proportions.
Negative prompt: plastic skin, over-smoothing, harsh sharpening, unnatural skin tone, artifacts.";

const PRODUCT_PROMPT: &str = "\
Enhance product image sharpness and clarity.
Improve edge definition, text readability, logos, and surface details.
Increase overall crispness while keeping clean background.
Avoid reflections distortion and excessive contrast.
Maintain true product colors.
Negative prompt: blurred edges, color shift, noise, artificial reflections, distorted text.";

const RETOUCH_PROMPT: &str = "\
Professional beauty retouch and image enhancement.
Remove acne, cystic acne, blackheads, and skin blemishes.
Preserve natural skin texture, pores, and facial structure.
Enhance facial details such as eyes, lips, and hair naturally.
Maintain realistic lighting and color balance.

Apply subtle sharpening to eyes, eyelashes, eyebrows, and lips.
Avoid sharpening skin texture excessively.

CRITICAL INSTRUCTIONS FOR SKIN TONE:
1. If the subject has dark or brown skin tone:
   - Remove acne and blackheads only.
   - Do NOT brighten, whiten, or alter natural skin tone.
   - Preserve original skin color and texture.
   - Avoid skin smoothing beyond acne removal.

2. If the subject has fair or light skin tone:
   - Remove acne, blackheads, and minor imperfections.
   - Apply gentle skin smoothing while preserving pores.
   - Enhance skin to a soft, healthy, pinkish-white tone.
   - Avoid excessive whitening or unnatural glow.

Negative prompt: skin whitening (for dark skin), skin brightening (for dark skin), color shift, plastic skin, loss of texture, over-smoothing, over-whitening, harsh blur, unnatural glow.";

/// Fixed instruction template for a mode. Every mode has exactly one
/// template; adding a mode without one is a compile error, not a runtime
/// fallback.
pub fn instruction_template(mode: EnhancementMode) -> &'static str {
    match mode {
        EnhancementMode::Landscape => LANDSCAPE_PROMPT,
        EnhancementMode::Portrait => PORTRAIT_PROMPT,
        EnhancementMode::Product => PRODUCT_PROMPT,
        EnhancementMode::Retouch => RETOUCH_PROMPT,
    }
}

/// Full instruction text for one enhancement request. Deterministic for a
/// given (mode, upscale) pair, independent of image content.
pub fn build_prompt(mode: EnhancementMode, upscale: UpscaleLevel) -> String {
    let mut prompt = instruction_template(mode).to_string();

    if let Some(multiplier) = upscale.multiplier() {
        prompt.push_str(&format!(
            "\nOutput the result in high resolution. Enhance details significantly (Simulate {multiplier} upscale)."
        ));
    }

    prompt
}
