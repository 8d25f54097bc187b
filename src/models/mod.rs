// Cross-boundary records. Every struct rejects unknown fields and every closed
// vocabulary is an enum, so malformed collaborator output fails at parse time.

mod grooming;
mod outfit;
mod profile;
mod recommendation;
mod remark;
mod score;

pub use grooming::GroomingProfile;
pub use outfit::{
    AccessoryAnalysis, AccessoryItem, AccessoryType, FootwearAnalysis, GarmentCategory,
    GarmentItem, OutfitBreakdown,
};
pub use profile::{BodyShape, FaceShape, Height, Season, SkinUndertone, UserProfile};
pub use recommendation::StyleRecommendation;
pub use remark::{BodyZone, Remark, RemarkCategory, Severity};
pub use score::Score;
