//! Explanatory copy for each support level.

use super::SupportType;

/// A titled link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub text: &'static str,
    pub url: &'static str,
}

/// A collapsible section shown below the main description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandableSection {
    /// May be empty for an untitled continuation
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub link: Option<Reference>,
}

/// Description of one support level, as shown in the info overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportTypeInfo {
    pub paragraphs: &'static [&'static str],
    pub reference: Option<Reference>,
    pub expandable: &'static [ExpandableSection],
}

const UPSTREAM: SupportTypeInfo = SupportTypeInfo {
    paragraphs: &[
        "A supported vehicle is one that just works when you install a comma device. \
         All supported cars provide a better experience than any stock system.",
        "Supported vehicles reference the US market unless otherwise specified.",
    ],
    reference: None,
    expandable: &[],
};

const UNDER_REVIEW: SupportTypeInfo = SupportTypeInfo {
    paragraphs: &[
        "A vehicle under review is one for which software support has been merged into \
         upstream openpilot, but hasn't yet been tested for drive quality and conformance \
         with comma safety guidelines (linked below).",
    ],
    reference: Some(Reference {
        text: "comma Safety Guidelines",
        url: "https://github.com/commaai/openpilot/blob/master/docs/SAFETY.md",
    }),
    expandable: &[ExpandableSection {
        title: "",
        paragraphs: &[
            "This is a normal part of the development and quality assurance process. \
             This vehicle will not work when upstream openpilot is installed, but custom \
             forks may allow their use.",
        ],
        link: None,
    }],
};

const COMMUNITY: SupportTypeInfo = SupportTypeInfo {
    paragraphs: &[
        "Although they're not upstream, the community has openpilot running on other makes \
         and models. See the Community Supported Models section of each make on our wiki \
         (linked below).",
    ],
    reference: Some(Reference {
        text: "openpilot wiki",
        url: "https://github.com/commaai/openpilot/wiki",
    }),
    expandable: &[],
};

const DASHCAM_MODE: SupportTypeInfo = SupportTypeInfo {
    paragraphs: &[
        "Dashcam vehicles have software support in upstream openpilot, but will go into \
         \"dashcam mode\" at startup and will not engage.",
        "This may be due to known issues with driving safety or quality, or it may be a \
         work in progress that isn't yet ready for safety and quality review.",
    ],
    reference: None,
    expandable: &[],
};

const NOT_COMPATIBLE: SupportTypeInfo = SupportTypeInfo {
    paragraphs: &[
        "This vehicle is not compatible with openpilot.",
        "This may be due to incompatible safety systems, lack of CAN bus access, or other \
         technical limitations that prevent openpilot from interfacing with the vehicle's \
         controls.",
    ],
    reference: None,
    expandable: &[
        ExpandableSection {
            title: "CAN Bus Security",
            paragraphs: &[
                "Vehicles with CAN security measures, such as AUTOSAR Secure Onboard \
                 Communication (SecOC) are not usable with openpilot unless the owner can \
                 recover the message signing key and implement CAN message signing. \
                 Examples include certain newer Toyota, and the GM Global B platform.",
            ],
            link: Some(Reference {
                text: "CAN bus on Wikipedia",
                url: "https://en.wikipedia.org/wiki/CAN_bus",
            }),
        },
        ExpandableSection {
            title: "FlexRay",
            paragraphs: &[
                "All the cars that openpilot supports use a CAN bus for communication between \
                 all the car's computers, however a CAN bus isn't the only way that the \
                 computers in your car can communicate.",
                "Most, if not all, vehicles from the following manufacturers use FlexRay \
                 instead of a CAN bus: BMW, Mercedes, Audi, Land Rover, and some Volvo. These \
                 cars may one day be supported, but we have no immediate plans to support \
                 FlexRay.",
            ],
            link: Some(Reference {
                text: "FlexRay on Wikipedia",
                url: "https://en.wikipedia.org/wiki/FlexRay",
            }),
        },
    ],
};

impl SupportType {
    /// Explanatory copy for a known support level.
    #[must_use]
    pub const fn info(&self) -> Option<&'static SupportTypeInfo> {
        match self {
            Self::Upstream => Some(&UPSTREAM),
            Self::UnderReview => Some(&UNDER_REVIEW),
            Self::Community => Some(&COMMUNITY),
            Self::DashcamMode => Some(&DASHCAM_MODE),
            Self::NotCompatible => Some(&NOT_COMPATIBLE),
            Self::Unknown | Self::Other(_) => None,
        }
    }
}
