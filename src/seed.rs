//! Built-in seed list shown on first launch.

use crate::pet::{Pet, Sex, Size, Species};

/// The demo adoption catalogue, in display order.
pub fn seed_pets() -> Vec<Pet> {
    vec![
        Pet::new("Luna", Species::Cat, Size::Small, Sex::Female)
            .with_location("Lisbon, PT")
            .with_description("Quiet indoor cat. Sleeps on warm keyboards.")
            .with_assets("luna", "ic_cat"),
        Pet::new("Milo", Species::Dog, Size::Large, Sex::Male)
            .with_location("Porto, PT")
            .with_description("Loves long walks and longer naps.")
            .with_assets("milo", "ic_dog"),
        Pet::new("Pascal", Species::Chameleon, Size::Small, Sex::Male)
            .with_location("Faro, PT")
            .with_description("Changes colour when nervous. Needs a warm terrarium.")
            .with_assets("pascal", "ic_chameleon"),
        Pet::new("Nala", Species::Cat, Size::Medium, Sex::Female)
            .with_location("Braga, PT")
            .with_description("Curious and talkative. Good with children.")
            .with_assets("nala", "ic_cat"),
        Pet::new("Rocky", Species::Dog, Size::Medium, Sex::Male)
            .with_location("Coimbra, PT")
            .with_description("Energetic terrier mix, house-trained.")
            .with_assets("rocky", "ic_dog"),
    ]
}
