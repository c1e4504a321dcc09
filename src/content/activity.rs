//! Text around the settlement activity.

use super::{Block, Section};

use Block::*;

pub fn activity_background() -> &'static Section {
    &BACKGROUND
}

pub fn discussion_questions() -> &'static Section {
    &DISCUSSION
}

pub fn historical_outcome() -> &'static Section {
    &OUTCOME
}

static BACKGROUND: Section = Section {
    title: "📖 Historical Background - Click to Read",
    blocks: &[
        Text("**The Mistake That Changed Michigan's History**"),
        Text("In 1815, government surveyor Edward Tiffin was sent to explore Michigan Territory. His report was devastating: he claimed most of the land was swampy and uninhabitable. Because of this negative assessment, War of 1812 veterans were given land in Illinois and Missouri instead of Michigan."),
        Text("**But the surveyors were wrong!**"),
        Text("When pioneers finally ventured into Michigan's interior in the 1820s-1830s, they discovered:"),
        Bullets(&[
            "The southern Lower Peninsula had incredibly fertile soil",
            "Michigan became a national leader in wheat production",
            "The Lake Michigan shoreline was perfect for fruit orchards (apples, peaches, cherries)",
            "Even the swamplands, when drained, revealed some of the richest farmland",
        ]),
        Text("This \"error of the pioneers\" delayed Michigan's growth by a decade but ultimately couldn't stop the flood of settlers once word got out about the true nature of the land."),
    ],
};

static DISCUSSION: Section = Section {
    title: "💭 Class Discussion Questions",
    blocks: &[Expander {
        summary: "Click to view discussion questions",
        blocks: &[Outline(&[
            (
                "**Why did the government surveyors misjudge Michigan's potential?**",
                &["Consider: Limited exploration, focusing on swamps, time of year visited"],
            ),
            (
                "**What would make you trust your own observations over official government reports?**",
                &["Think about: Incentives, firsthand experience, risk vs. reward"],
            ),
            (
                "**How did the Erie Canal (completed 1825) change Michigan settlement?**",
                &["Impact on: Transportation, access to markets, flow of settlers"],
            ),
            (
                "**What role did wetlands play in both helping and hindering settlement?**",
                &[
                    "Negative: Disease, difficult travel, harder to farm initially",
                    "Positive: Rich soil when drained, wildlife, fishing",
                ],
            ),
            (
                "**How did early settlers' choices shape modern Michigan cities?**",
                &["Think about: Detroit, Grand Rapids, Kalamazoo, Saginaw"],
            ),
            (
                "**What can we learn from the \"error of the pioneers\" for today?**",
                &["Lessons about: First impressions, persistence, expert opinions, exploring beyond reports"],
            ),
        ])],
    }],
};

static OUTCOME: Section = Section {
    title: "📚 What Actually Happened?",
    blocks: &[Expander {
        summary: "Click to see the historical outcome",
        blocks: &[
            Text("**The Truth Revealed (1825-1837)**"),
            Text("Once the Erie Canal opened in 1825, thousands of New England settlers poured into Michigan. They discovered:"),
            Bullets(&[
                "**Southern Michigan** became prime wheat country and one of America's agricultural powerhouses",
                "**Lake Michigan Coast** developed thriving fruit orchards (Michigan is still a top fruit producer today!)",
                "**Grand Rapids** grew around furniture manufacturing using Michigan's abundant timber",
                "**Detroit** exploded as a gateway city and later became the automotive capital",
                "**Kalamazoo area** - Dutch immigrants turned swamplands into celery-growing regions",
                "**Saginaw Valley** - The \"uninhabitable swamps\" became some of the richest farmland after drainage",
            ]),
            Text("By 1837, Michigan had enough population to become a state - just 12 years after being dismissed as worthless swampland!"),
            Text("**The Lesson:** Sometimes the experts are wrong. The pioneers who ignored the negative reports and explored for themselves discovered one of America's most valuable territories."),
        ],
    }],
};
