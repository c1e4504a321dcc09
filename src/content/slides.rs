//! The ten lecture slides.

use super::{Block, CalloutKind, Slide};
use crate::models::SlideIndex;

use Block::*;

/// Content for a slide.
pub fn slide(index: SlideIndex) -> &'static Slide {
    match index.get() {
        1 => &TITLE,
        2 => &SURVEY,
        3 => &GEOGRAPHY,
        4 => &TURNING_POINT,
        5 => &FRONTIER_LIFE,
        6 => &SETTLEMENT_PATTERNS,
        7 => &NATIVE_PERSPECTIVE,
        8 => &ECONOMY,
        9 => &STATEHOOD,
        _ => &LESSONS,
    }
}

static TITLE: Slide = Slide {
    title: "Chapter 9: The Error of the Pioneers",
    blocks: &[
        Centered {
            level: 1,
            text: "Chapter 9: The Error of the Pioneers",
        },
        Centered {
            level: 2,
            text: "Michigan Territory Settlement, 1815-1837",
        },
        Centered {
            level: 3,
            text: "From 'Uninhabitable Swampland' to Agricultural Powerhouse",
        },
        Image {
            src: "https://upload.wikimedia.org/wikipedia/commons/thumb/b/b5/Michigan_in_United_States.svg/1200px-Michigan_in_United_States.svg.png",
            alt: "Michigan in the United States",
            width: 400,
        },
    ],
};

static SURVEY: Slide = Slide {
    title: "The Survey That Changed History",
    blocks: &[Columns(&[
        &[
            Heading("📋 The 1815 Tiffin Survey"),
            Text("**Key Facts:**"),
            Bullets(&[
                "**Who:** Surveyor General Edward Tiffin",
                "**When:** 1815, after War of 1812",
                "**Purpose:** Find land for war veterans",
                "**Result:** Devastating report",
            ]),
            Text("**Tiffin's Assessment:**"),
            Quote(&[
                "\"Not more than one acre in a hundred,",
                "if there is one out of a thousand,",
                "that would admit of cultivation\"",
            ]),
        ],
        &[
            Heading("🚫 Consequences"),
            Text("**Immediate Impact:**"),
            Bullets(&[
                "❌ War of 1812 veterans given land in Illinois and Missouri instead",
                "❌ Michigan labeled \"uninhabitable\"",
                "❌ Settlement delayed by a decade",
                "❌ National reputation damaged",
            ]),
            Text("**Why the Error?**"),
            Bullets(&[
                "Limited exploration of interior",
                "Focused on swampy areas",
                "Surveyed during mosquito season",
                "Didn't see cleared land potential",
            ]),
        ],
    ])],
};

static GEOGRAPHY: Slide = Slide {
    title: "Michigan's Hidden Treasures",
    blocks: &[
        Columns(&[
            &[
                Heading("🌾 Southern Lower Peninsula"),
                Text("**Reality:** Prime farmland"),
                Bullets(&[
                    "Rich glacial soil",
                    "Perfect for wheat",
                    "Became national leader in grain",
                    "Diverse crop capability",
                ]),
            ],
            &[
                Heading("🍎 Lake Michigan Coast"),
                Text("**Reality:** Fruit paradise"),
                Bullets(&[
                    "Moderated climate",
                    "Perfect for orchards",
                    "Apples, peaches, cherries",
                    "Still top producer today",
                ]),
            ],
            &[
                Heading("💧 \"Swamplands\""),
                Text("**Reality:** Richest soil"),
                Bullets(&[
                    "When drained = gold",
                    "Celery production (Kalamazoo)",
                    "Sugar beets",
                    "Premium agricultural land",
                ]),
            ],
        ]),
        Callout(
            CalloutKind::Success,
            &[Text("💡 **The Lesson:** Surface appearances deceived the surveyors. The 'useless' land was actually one of America's most valuable territories!")],
        ),
    ],
};

static TURNING_POINT: Slide = Slide {
    title: "1825: Everything Changes",
    blocks: &[
        Heading("🚢 The Erie Canal Opens"),
        Columns(&[
            &[
                Text("**Before the Canal (pre-1825):**"),
                Bullets(&[
                    "Detroit to NYC: 3-4 weeks overland",
                    "Expensive, dangerous journey",
                    "Limited access to markets",
                    "Population: ~8,000 in territory",
                ]),
            ],
            &[
                Text("**After the Canal (1825+):**"),
                Bullets(&[
                    "Detroit to NYC: 8-10 days by water",
                    "Affordable transportation",
                    "Direct market access",
                    "By 1837: 175,000+ residents!",
                ]),
            ],
        ]),
        Callout(
            CalloutKind::Info,
            &[Text("📊 **Migration Surge:** 'It seemed as if all New England were coming' - Contemporary observer")],
        ),
        Heading("🏃 The Pioneer Rush"),
        Text("**Who came?**"),
        Bullets(&[
            "New England farmers seeking new land",
            "European immigrants (Dutch, German, Irish)",
            "Former soldiers curious about reports",
            "Entrepreneurs seeing opportunity",
        ]),
        Text("**What they found:**"),
        Bullets(&[
            "Reports were wrong",
            "Land was incredibly fertile",
            "Opportunities everywhere",
            "A 'promised land'",
        ]),
    ],
};

static FRONTIER_LIFE: Slide = Slide {
    title: "Life on the Michigan Frontier",
    blocks: &[Columns(&[
        &[
            Heading("😰 Real Challenges"),
            Text("**Physical Obstacles:**"),
            Bullets(&[
                "Dense old-growth forests",
                "Actual swamps and wetlands",
                "Mosquito-borne \"ague\" (malaria-like illness)",
                "Harsh winters",
                "Isolation from civilization",
            ]),
            Text("**Survival Needs:**"),
            Bullets(&[
                "Clear land (backbreaking work)",
                "Build shelter before winter",
                "Establish water source",
                "Plant crops immediately",
                "Create relationships with Native Americans",
            ]),
        ],
        &[
            Heading("💪 Pioneer Solutions"),
            Text("**Community Response:**"),
            Bullets(&[
                "Barn-raising gatherings",
                "Shared labor and tools",
                "Trading with existing settlements",
                "Learning from Native techniques",
                "Gradual land clearing",
            ]),
            Text("**Economic Strategies:**"),
            Bullets(&[
                "Wheat as cash crop",
                "Timber sales",
                "Fur trading",
                "Fruit cultivation",
                "Mill operations",
            ]),
        ],
    ])],
};

static SETTLEMENT_PATTERNS: Slide = Slide {
    title: "Where Did Pioneers Settle?",
    blocks: &[
        Table {
            headers: &["Region", "Early Settlers", "By 1837", "Primary Activity"],
            rows: &[
                &["Detroit Area", "5000", "9000", "Trade/Commerce"],
                &["Grand River Valley", "2000", "8000", "Farming/Mills"],
                &["Saginaw Valley", "800", "3500", "Lumber/Farming"],
                &["Lake Michigan Coast", "1500", "6000", "Fruit Orchards"],
                &["Ann Arbor Area", "1200", "4500", "Education/Farming"],
            ],
        },
        Heading("🎯 Settlement Priorities"),
        Text("**Most Successful Settlements Had:**"),
        Outline(&[
            ("**Water Access** - Rivers or lakes for transportation", &[]),
            ("**Mixed Economy** - Not just farming", &[]),
            ("**Community** - Mutual support systems", &[]),
            ("**Trade Routes** - Connection to markets", &[]),
            ("**Diverse Resources** - Timber, farmland, water power", &[]),
        ]),
    ],
};

static NATIVE_PERSPECTIVE: Slide = Slide {
    title: "The Native American Perspective",
    blocks: &[
        Columns(&[
            &[
                Heading("🌍 Original Inhabitants"),
                Text("**Michigan's Native Nations:**"),
                Bullets(&[
                    "Anishinaabe (Ojibwe/Chippewa)",
                    "Odawa (Ottawa)",
                    "Potawatomi",
                    "Wyandot (Huron)",
                    "Miami",
                ]),
                Text("**Their Relationship with the Land:**"),
                Bullets(&[
                    "Lived here for thousands of years",
                    "Sustainable hunting and agriculture",
                    "Sacred sites throughout territory",
                    "Complex trade networks",
                    "Deep environmental knowledge",
                ]),
            ],
            &[
                Heading("📜 Treaty Era (1819-1842)"),
                Text("**Land Cessions:**"),
                Bullets(&[
                    "1819-1822: Lewis Cass treaties",
                    "Gradual loss of territory",
                    "By 1842: Most land ceded",
                    "Forced relocations",
                    "Broken promises",
                ]),
                Text("**Impact on Pioneers:**"),
                Bullets(&[
                    "Native knowledge crucial to survival",
                    "Trade relationships essential",
                    "Trails became roads",
                    "Place names preserved",
                    "Cultural exchange occurred",
                ]),
            ],
        ]),
        Callout(
            CalloutKind::Warning,
            &[Text("⚠️ **Important Context:** Pioneer success came at devastating cost to Native communities through forced removal and broken treaties.")],
        ),
    ],
};

static ECONOMY: Slide = Slide {
    title: "From 'Worthless' to Wealthy",
    blocks: &[
        Heading("📈 Michigan's Economic Evolution"),
        Table {
            headers: &["Year", "Population", "Key Development"],
            rows: &[
                &["1815", "8000", "Tiffin Report: \"Uninhabitable\""],
                &["1825", "15000", "Erie Canal Opens"],
                &["1830", "32000", "Wheat Boom Begins"],
                &["1835", "85000", "Statehood Push"],
                &["1837", "175000", "Michigan Becomes State!"],
                &["1840", "212000", "Agricultural Powerhouse"],
            ],
        },
        Columns(&[
            &[
                Heading("🌾 Agriculture"),
                Bullets(&[
                    "Wheat production leader",
                    "Fruit orchards boom",
                    "Dairy farming",
                    "Sugar beets",
                    "Mint production",
                ]),
            ],
            &[
                Heading("🏭 Industry"),
                Bullets(&[
                    "Lumber mills",
                    "Flour mills",
                    "Furniture (Grand Rapids)",
                    "Mining (Upper Peninsula)",
                    "Manufacturing centers",
                ]),
            ],
            &[
                Heading("🏙️ Urban Growth"),
                Bullets(&[
                    "Detroit: Major port",
                    "Grand Rapids: Furniture",
                    "Kalamazoo: Celery/paper",
                    "Saginaw: Lumber",
                    "Ann Arbor: Education",
                ]),
            ],
        ]),
    ],
};

static STATEHOOD: Slide = Slide {
    title: "The Road to Statehood",
    blocks: &[
        Heading("🏛️ Michigan Becomes the 26th State"),
        Text("**January 26, 1837**"),
        Columns(&[
            &[
                Heading("Requirements Met"),
                Text("**Constitutional Requirements:**"),
                Bullets(&[
                    "✅ 60,000 residents (had 175,000!)",
                    "✅ Territorial government functioning",
                    "✅ State constitution written",
                    "✅ Congressional approval",
                ]),
                Text("**The Obstacle:**"),
                Bullets(&[
                    "Toledo Strip boundary dispute with Ohio",
                    "Lost Toledo (valuable port)",
                    "Gained Upper Peninsula as compensation",
                    "Initially seen as bad deal!",
                ]),
            ],
            &[
                Heading("Historical Irony"),
                Text("**From Rejection to Success:**"),
                Bullets(&[
                    "1815: \"Not worth defending\"",
                    "1837: 26th state of the Union",
                    "22 years from despair to statehood!",
                ]),
                Text("**The Upper Peninsula 'Consolation':**"),
                Bullets(&[
                    "Seemed worthless at first",
                    "Discovered: Massive copper deposits",
                    "Discovered: Rich iron ore",
                    "Became mining powerhouse",
                    "Another \"expert error\" corrected!",
                ]),
            ],
        ]),
    ],
};

static LESSONS: Slide = Slide {
    title: "Lessons from the Error of the Pioneers",
    blocks: &[
        Heading("🎓 What Can We Learn?"),
        Columns(&[
            &[
                Heading("Historical Lessons"),
                Text("**1. Don't Trust Limited Observations**"),
                Bullets(&[
                    "Tiffin surveyed during worst season",
                    "Didn't explore thoroughly",
                    "Lacked agricultural perspective",
                ]),
                Text("**2. Perception vs. Reality**"),
                Bullets(&[
                    "Surface conditions misleading",
                    "Potential hidden beneath challenges",
                    "Time reveals true value",
                ]),
                Text("**3. Human Determination Matters**"),
                Bullets(&[
                    "Pioneers didn't give up",
                    "Transformed \"worthless\" land",
                    "Innovation overcame obstacles",
                ]),
            ],
            &[
                Heading("Modern Applications"),
                Text("**Critical Thinking:**"),
                Bullets(&[
                    "Question expert opinions",
                    "Seek multiple perspectives",
                    "Verify with primary sources",
                    "Consider biases and context",
                ]),
                Text("**Environmental Understanding:**"),
                Bullets(&[
                    "Wetlands actually valuable",
                    "\"Wastelands\" often ecosystems",
                    "Development has tradeoffs",
                    "Historical wisdom matters",
                ]),
                Text("**Opportunity Recognition:**"),
                Bullets(&[
                    "Others' rejections = your opportunity",
                    "Look beyond obvious",
                    "Challenge conventional wisdom",
                ]),
            ],
        ]),
        Callout(
            CalloutKind::Success,
            &[
                Heading("🌟 Bottom Line"),
                Text("The \"Error of the Pioneers\" wasn't made by the pioneers themselves. It was made by the experts who dismissed Michigan without truly understanding it. The pioneers who ignored the negative reports and explored for themselves discovered one of America's greatest treasures."),
                Text("**Ask your students:** Where in your life might expert opinion be wrong? What \"useless\" opportunities might actually be valuable if explored with fresh eyes?"),
            ],
        ),
    ],
};
