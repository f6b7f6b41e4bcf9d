use rand::Rng;

lazy_static! {
    pub static ref SURPRISE_ME_PROMPTS: Vec<&'static str> = vec![
        "an armchair in the shape of an avocado",
        "a surrealist dream-like oil painting by Salvador Dali of a cat playing checkers",
        "teddy bears shopping for groceries in Japan, ukiyo-e",
        "an oil painting by Matisse of a humanoid robot playing chess",
        "a pencil and watercolor drawing of a bright city in the future with flying cars",
        "a 3D render of a rainbow colored hot air balloon flying above a reflective lake",
        "a van Gogh style painting of an American football player",
        "an astronaut lounging in a tropical resort in space, vaporwave",
        "a bowl of soup that is also a portal to another dimension, digital art",
        "a photo of a teddy bear on a skateboard in Times Square",
        "a synthwave style sunset above the reflecting water of the sea, digital art",
        "a fortune-telling shiba inu reading your fate in a giant hamburger, digital art",
    ];
}

/// Picks a surprise-me prompt, re-rolling so the current prompt is never
/// returned back.
pub fn get_random_prompt(prompt: &str) -> String {
    let mut rng = rand::thread_rng();
    let index = rng.gen_range(0..SURPRISE_ME_PROMPTS.len());
    let random_prompt = SURPRISE_ME_PROMPTS[index];

    if random_prompt == prompt {
        return get_random_prompt(prompt);
    }

    random_prompt.to_string()
}
