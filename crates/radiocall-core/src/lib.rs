mod branches;
pub mod callsign;
pub mod composer;
pub mod error;
pub mod models;
pub mod phonetics;
pub mod policy;
pub mod reference;
pub mod subcategory;
pub mod values;

pub use callsign::{Callsign, CallsignSynthesizer};
pub use composer::RadiocallGenerator;
pub use error::{GeneratorError, ParseError};
pub use models::{
    AcceptableVariation, Airport, CallsignTemplate, Category, CommonError, ControllerPosition,
    Difficulty, FlightPhase, Instruction, InstructionType, InstructionValue, Radiocall,
    RadiocallBundle, Severity,
};
pub use phonetics::{
    digits_to_phonetic, frequency_to_phonetic, letters_to_phonetic, runway_to_phonetic,
};
pub use policy::{CallsignStyle, DifficultyPolicy, SpeakingPace};
pub use reference::{default_callsign_templates, default_instruction_types};
pub use subcategory::Subcategory;
