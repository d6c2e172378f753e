use super::constants::EPISODE_COUNT;

/// Outbound link shown in the detail panel; opened in a new tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpisodeLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpisodeKind {
    Narrative,
    /// Fans hunt for a cameo appearance and submit a timestamp.
    CameoHunt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Episode {
    pub number: &'static str,
    pub short: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub links: &'static [EpisodeLink],
    pub xp_hook: &'static str,
    pub kind: EpisodeKind,
}

impl Episode {
    #[inline]
    pub fn is_cameo(&self) -> bool {
        self.kind == EpisodeKind::CameoHunt
    }

    /// Label for the panel tag.
    pub fn tag(&self) -> &'static str {
        match self.kind {
            EpisodeKind::Narrative => "Narrative",
            EpisodeKind::CameoHunt => "Cameo Challenge",
        }
    }

    /// Header line shown while this episode is the active stop, e.g. `EP03/08 — Elbow TV`.
    pub fn header_title(&self) -> String {
        format!("{}/{:02} — {}", self.number, EPISODES.len(), self.short)
    }
}

pub static EPISODES: [Episode; EPISODE_COUNT] = [
    Episode {
        number: "EP01",
        short: "Passport Girl",
        title: "Passport Girl — Origin Files",
        description: "Deep dive into Passport Girl and the early Tumblr era.",
        links: &[
            EpisodeLink {
                label: "Passport Girl (FB)",
                href: "https://www.facebook.com/share/v/1AZDAY8neg/?mibextid=wwXIfr",
            },
            EpisodeLink {
                label: "Tumblr Archive",
                href: "https://dazednconfuzed.tumblr.com",
            },
        ],
        xp_hook: "Comment your wildest old internet alter ego.",
        kind: EpisodeKind::Narrative,
    },
    Episode {
        number: "EP02",
        short: "No Gold Anything",
        title: "No Gold Anything — Cameo Hunt",
        description: "You appear, but it is not a DKTR N9NE piece. Fans hunt for the cameo.",
        links: &[EpisodeLink {
            label: "No Gold Anything (YouTube)",
            href: "https://youtu.be/cUFP2POUFG0?si=3FM4xRW8BRTYAX6Q",
        }],
        xp_hook: "Find the DKTR N9NE cameo and submit the timestamp to earn XP.",
        kind: EpisodeKind::CameoHunt,
    },
    Episode {
        number: "EP03",
        short: "Elbow TV",
        title: "Elbow TV — Mayweather vs Tebow",
        description: "Reacting to the Elbow TV clip and talking about comedy and media.",
        links: &[EpisodeLink {
            label: "Elbow TV: Mayweather vs Tebow",
            href: "https://youtu.be/yjp3253WjmQ?si=MiBFjQp8AoQtiDsW",
        }],
        xp_hook: "Fans pitch absurd matchups in comments for XP.",
        kind: EpisodeKind::Narrative,
    },
    Episode {
        number: "EP04",
        short: "Dream Girl",
        title: "Dream Girl ft Mr Thomas",
        description: "Breakdown of Dream Girl and the Maurice Thomas vs DKTR N9NE duality.",
        links: &[EpisodeLink {
            label: "Dream Girl ft Mr Thomas",
            href: "https://youtu.be/go-mLHuspuc?si=3u1fIPlztJaKSdbN",
        }],
        xp_hook: "Fans drop “dream person” tropes; best ones become Haiku.",
        kind: EpisodeKind::Narrative,
    },
    Episode {
        number: "EP05",
        short: "Chief Keef / 50 / Chop",
        title: "Chief Keef / 50 / Chop — Cameo Hunt",
        description: "Era document where you only cameo. Fans must spot and timestamp you.",
        links: &[EpisodeLink {
            label: "Chief Keef / 50 / Young Chop clip",
            href: "https://youtu.be/YMoSbh7AK8U?si=uNvxh1_L8QAAxZ0d",
        }],
        xp_hook: "Submit exact timestamp + what you are doing for bonus XP.",
        kind: EpisodeKind::CameoHunt,
    },
    Episode {
        number: "EP06",
        short: "Old Thing Back",
        title: "Old Thing Back",
        description: "Using Old Thing Back to talk about relationship nostalgia.",
        links: &[EpisodeLink {
            label: "Old Thing Back",
            href: "https://youtu.be/cZmULgDLi8g?si=YrTuVP590ZOi9DRf",
        }],
        xp_hook: "Fans vote on which “old thing” should be restored for SZN 2.",
        kind: EpisodeKind::Narrative,
    },
    Episode {
        number: "EP07",
        short: "Scared of The D",
        title: "Scared of The D",
        description: "Scared of The D as a lens on cities, fear, and respect.",
        links: &[EpisodeLink {
            label: "Scared of The D",
            href: "https://youtu.be/6ekFvpry5SY?si=Du64DOgUl49SeGq5",
        }],
        xp_hook: "Fans share the city they are lowkey scared of and why.",
        kind: EpisodeKind::Narrative,
    },
    Episode {
        number: "EP08",
        short: "Russell / Sound in Color",
        title: "Russell & Sound in Color",
        description: "The thesis statement for what DKTR N9NE actually sounds and looks like.",
        links: &[
            EpisodeLink {
                label: "Russell",
                href: "https://youtu.be/ljofa1n-Hf0?si=gpyVnKswzAUNvrYo",
            },
            EpisodeLink {
                label: "Sound in Color",
                href: "https://youtu.be/SVjEUTiOvYs?si=6aBiyOBhXqA8GAu9",
            },
        ],
        xp_hook: "Fans describe your sound in one color + one object.",
        kind: EpisodeKind::Narrative,
    },
];

/// Episode at a position in the fixed table.
#[inline]
pub fn episode_at(index: usize) -> Option<&'static Episode> {
    EPISODES.get(index)
}
