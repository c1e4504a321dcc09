//! Resources & library research page.

use super::{Block, CalloutKind, Section, Tab};

use Block::*;

/// Sections of the resources page, top to bottom.
pub fn resources_page() -> &'static [Section] {
    &RESOURCES
}

/// Main WCCCD library portal.
pub const WCCCD_LIBRARY: &str = "https://www.wcccd.edu/students/library.html";

static RESOURCES: [Section; 7] = [
    Section {
        title: "🎓 Wayne County Community College District Library",
        blocks: &[
            Columns(&[
                &[
                    Heading("Access Your WCCCD Library Resources"),
                    Text("The WCCCD Library provides extensive resources for researching Michigan history, primary sources, and historical documents."),
                    Text("**Library Services Available:**"),
                    Bullets(&[
                        "📚 Historical books and textbooks",
                        "🔍 Online databases and archives",
                        "📰 Historical newspapers and periodicals",
                        "🗺️ Maps and geographic resources",
                        "👥 Research assistance from librarians",
                        "💻 Digital collections",
                    ]),
                ],
                &[Callout(
                    CalloutKind::Info,
                    &[
                        Text("**WCCCD Library Hours**"),
                        Text("Visit your campus library or access online resources 24/7"),
                        Text("[Library Website](https://www.wcccd.edu/students/library.html)"),
                    ],
                )],
            ]),
            Heading("🔗 Quick Links to WCCCD Library"),
            Columns(&[
                &[
                    Text("**Main Library Portal**"),
                    Bullets(&[
                        "[WCCCD Library Home](https://www.wcccd.edu/students/library.html)",
                        "[Library Catalog Search](https://www.wcccd.edu/students/library.html)",
                        "[Ask a Librarian](https://www.wcccd.edu/students/library.html)",
                    ]),
                ],
                &[
                    Text("**Online Databases**"),
                    Bullets(&[
                        "[JSTOR Historical Archive](https://www.jstor.org/)",
                        "[ProQuest Historical](https://www.proquest.com/)",
                        "[EBSCOhost Research](https://www.ebsco.com/)",
                    ]),
                ],
                &[
                    Text("**Research Help**"),
                    Bullets(&[
                        "[Citation Guide](https://www.wcccd.edu/students/library.html)",
                        "[Research Tutorials](https://www.wcccd.edu/students/library.html)",
                        "[Schedule Appointment](https://www.wcccd.edu/students/library.html)",
                    ]),
                ],
            ]),
        ],
    },
    Section {
        title: "📜 Primary Source Collections",
        blocks: &[Columns(&[
            &[
                Heading("Michigan Historical Collections"),
                Text("**Digital Archives:**"),
                Bullets(&[
                    "[Library of Michigan Digital Collections](https://www.michigan.gov/libraryofmichigan)",
                    "[Bentley Historical Library (U of M)](https://bentley.umich.edu/)",
                    "[Clarke Historical Library (CMU)](https://www.cmich.edu/library/clarke)",
                    "[Michigan State University Archives](https://archives.msu.edu/)",
                    "[Detroit Public Library Digital Collections](https://digitalcollections.detroitpubliclibrary.org/)",
                ]),
                Text("**National Archives:**"),
                Bullets(&[
                    "[National Archives Catalog](https://catalog.archives.gov/)",
                    "[Library of Congress Michigan Collection](https://www.loc.gov/collections/)",
                    "[American Memory Project](https://memory.loc.gov/)",
                ]),
            ],
            &[
                Heading("Historical Societies & Museums"),
                Text("**Michigan Organizations:**"),
                Bullets(&[
                    "[Historical Society of Michigan](https://hsmichigan.org/)",
                    "[Michigan History Center](https://www.michigan.gov/mhc)",
                    "[Detroit Historical Society](https://detroithistorical.org/)",
                    "[Grand Rapids Public Museum](https://www.grpm.org/)",
                ]),
                Text("**Virtual Museums:**"),
                Bullets(&[
                    "[Smithsonian National Museum of American History](https://americanhistory.si.edu/)",
                    "[Michigan Historical Museum Virtual Tour](https://www.michigan.gov/mhc)",
                ]),
            ],
        ])],
    },
    Section {
        title: "📚 Recommended Reading",
        blocks: &[
            Heading("Essential Books on Michigan History"),
            Text("**Primary Text:**"),
            Outline(&[(
                "**\"Michigan: A History of the Wolverine State\"** by Willis F. Dunbar and George S. May",
                &[
                    "*The definitive textbook on Michigan history*",
                    "Available at WCCCD Library",
                    "ISBN: 978-0802870551",
                ],
            )]),
            Text("**Additional Recommended Books:**"),
            Columns(&[
                &[
                    Text("**General Michigan History:**"),
                    Bullets(&[
                        "\"A Most Superior Land: Life in the Upper Peninsula of Michigan\" by Daniel J. Fountain",
                        "\"Michigan: A History\" by Bruce A. Rubenstein & Lawrence E. Ziewacz",
                        "\"The Great Book of Michigan\" by J. Alexander",
                        "\"Detroit: An American Autopsy\" by Charlie LeDuff",
                    ]),
                    Text("**Pioneer and Settlement Era:**"),
                    Bullets(&[
                        "\"Pioneer Life in Michigan\" by Mildred M. Comfort",
                        "\"The Old Northwest\" by R. Carlyle Buley",
                        "\"The Land Looks After Us\" by Miranda Belarde-Lewis",
                    ]),
                ],
                &[
                    Text("**Native American History:**"),
                    Bullets(&[
                        "\"The Anishinaabeg of Michigan\" by Michael Witgen",
                        "\"Master of the Great Lakes\" by Michael A. McDonnell",
                        "\"Colonialism and the Ojibwe\" by Dwayne Donald",
                    ]),
                    Text("**Economic & Social History:**"),
                    Bullets(&[
                        "\"Frontier Industrialization\" by R. Douglas Hurt",
                        "\"The Great Lakes Frontier\" by John Anthony Caruso",
                        "\"Michigan: Visions of Our Past\" by Richard J. Hathaway",
                    ]),
                ],
            ]),
        ],
    },
    Section {
        title: "🌐 Free Online Resources",
        blocks: &[Tabs(&[
            Tab {
                label: "Historical Documents",
                blocks: &[
                    Heading("Primary Historical Documents"),
                    Text("**Government Documents:**"),
                    Bullets(&[
                        "[Michigan Territorial Papers](https://quod.lib.umich.edu/m/michiganhistory/)",
                        "[U.S. Land Survey Records](https://glorecords.blm.gov/)",
                        "[Congressional Records - Michigan Territory](https://www.congress.gov/)",
                    ]),
                    Text("**Newspapers & Periodicals:**"),
                    Bullets(&[
                        "[Chronicling America (Historic Newspapers)](https://chroniclingamerica.loc.gov/)",
                        "[Michigan Newspapers on Google News Archive](https://news.google.com/newspapers)",
                        "[Detroit Free Press Historical Archive](https://www.newspapers.com/)",
                    ]),
                    Text("**Journals & Academic Articles:**"),
                    Bullets(&[
                        "[Michigan Historical Review](https://www.hsmichigan.org/michigan-historical-review/)",
                        "[Michigan History Magazine Archive](https://www.michigan.gov/mhc)",
                        "[JSTOR Open Access Articles](https://www.jstor.org/)",
                    ]),
                ],
            },
            Tab {
                label: "Maps & Geography",
                blocks: &[
                    Heading("Maps and Geographic Resources"),
                    Text("**Historical Maps:**"),
                    Bullets(&[
                        "[David Rumsey Map Collection](https://www.davidrumsey.com/)",
                        "[Library of Congress Map Collections](https://www.loc.gov/maps/)",
                        "[Michigan Historical Map Collection](https://quod.lib.umich.edu/m/michmaps/)",
                        "[USGS Historical Topographic Maps](https://www.usgs.gov/programs/national-geospatial-program)",
                    ]),
                    Text("**Interactive Geography:**"),
                    Bullets(&[
                        "[Michigan Geographic Alliance](https://geo.msu.edu/)",
                        "[USGS Earth Explorer](https://earthexplorer.usgs.gov/)",
                        "[Historic Detroit Map Portal](https://detroithistorical.org/learn)",
                    ]),
                ],
            },
            Tab {
                label: "Educational Sites",
                blocks: &[
                    Heading("Educational Websites"),
                    Text("**Michigan History Education:**"),
                    Bullets(&[
                        "[Michigan History for Kids](https://www.michigan.gov/mhc/education/for-kids)",
                        "[National Park Service - Michigan Sites](https://www.nps.gov/state/mi/index.htm)",
                        "[PBS Learning Media - Michigan History](https://www.pbslearningmedia.org/)",
                    ]),
                    Text("**Pioneer and Frontier Life:**"),
                    Bullets(&[
                        "[National Geographic - Pioneer Life](https://www.nationalgeographic.org/)",
                        "[American Experience - Frontier Life](https://www.pbs.org/wgbh/americanexperience/)",
                        "[Smithsonian Learning Lab](https://learninglab.si.edu/)",
                    ]),
                    Text("**Native American Resources:**"),
                    Bullets(&[
                        "[National Museum of the American Indian](https://americanindian.si.edu/)",
                        "[Native Knowledge 360°](https://americanindian.si.edu/nk360)",
                    ]),
                ],
            },
        ])],
    },
    Section {
        title: "💡 Research Tips for Students",
        blocks: &[Columns(&[
            &[
                Heading("How to Research Michigan History"),
                Text("**Step 1: Start Broad**"),
                Bullets(&[
                    "Read overview chapters in Dunbar & May",
                    "Get the big picture timeline",
                    "Identify specific topics that interest you",
                ]),
                Text("**Step 2: Find Primary Sources**"),
                Bullets(&[
                    "Look for firsthand accounts",
                    "Check historical newspapers",
                    "Read letters, diaries, and documents",
                    "Examine maps from the period",
                ]),
                Text("**Step 3: Consult Multiple Sources**"),
                Bullets(&[
                    "Compare different perspectives",
                    "Look for corroboration",
                    "Note contradictions",
                    "Consider biases",
                ]),
            ],
            &[
                Heading("Evaluating Historical Sources"),
                Text("**Ask These Questions:**"),
                Bullets(&[
                    "Who created this source?",
                    "When was it created?",
                    "Why was it created?",
                    "Who was the intended audience?",
                    "What biases might exist?",
                    "Is it corroborated by other sources?",
                ]),
                Text("**Citation Formats:**"),
                Bullets(&[
                    "[MLA Format Guide](https://owl.purdue.edu/owl/research_and_citation/mla_style/mla_formatting_and_style_guide/mla_formatting_and_style_guide.html)",
                    "[Chicago Manual Style](https://www.chicagomanualofstyle.org/)",
                    "[APA Format](https://apastyle.apa.org/)",
                ]),
            ],
        ])],
    },
    Section {
        title: "✍️ Research Project Ideas",
        blocks: &[Expander {
            summary: "Click for research project suggestions",
            blocks: &[
                Heading("Project Options"),
                Outline(&[
                    (
                        "**Primary Source Analysis**",
                        &[
                            "Analyze letters from Michigan pioneers",
                            "Compare government surveys with settler accounts",
                            "Study newspaper articles from 1820s-1830s",
                        ],
                    ),
                    (
                        "**Local History Research**",
                        &[
                            "Research the founding of your Michigan city/town",
                            "Interview local historians",
                            "Visit local historical societies",
                        ],
                    ),
                    (
                        "**Comparative Study**",
                        &[
                            "Compare Michigan settlement to other states",
                            "Analyze different regions of Michigan",
                            "Study immigrant group contributions",
                        ],
                    ),
                    (
                        "**Biography Project**",
                        &[
                            "Research a Michigan pioneer",
                            "Study Native American leaders",
                            "Investigate government officials",
                        ],
                    ),
                    (
                        "**Digital Humanities Project**",
                        &[
                            "Create an interactive timeline",
                            "Map migration patterns",
                            "Build a digital exhibit",
                        ],
                    ),
                    (
                        "**Creative Projects**",
                        &[
                            "Write a historical fiction diary",
                            "Create a museum exhibit proposal",
                            "Develop an educational video",
                        ],
                    ),
                ]),
            ],
        }],
    },
    Section {
        title: "📧 Need Help?",
        blocks: &[Callout(
            CalloutKind::Info,
            &[
                Text("**Contact Your WCCCD Librarian:**"),
                Bullets(&[
                    "Visit the library reference desk",
                    "Email: library@wcccd.edu",
                    "Call: Contact your campus library",
                    "Schedule a research consultation",
                ]),
                Text("**Research Support Hours:**"),
                Text("Monday-Friday: 8am-5pm"),
                Text("Online resources: Available 24/7"),
            ],
        )],
    },
];

/// Every external link on the page, in order of appearance.
pub fn resource_links() -> Vec<(&'static str, &'static str)> {
    let mut links = Vec::new();
    for section in resources_page() {
        collect_links(section.blocks, &mut links);
    }
    links
}

fn collect_links(blocks: &'static [Block], out: &mut Vec<(&'static str, &'static str)>) {
    for block in blocks {
        match block {
            Text(t) => out.extend(super::render::links(*t)),
            Bullets(items) => items.iter().for_each(|t| out.extend(super::render::links(*t))),
            Callout(_, inner) => collect_links(inner, out),
            Columns(cols) => cols.iter().for_each(|c| collect_links(c, out)),
            Expander { blocks, .. } => collect_links(blocks, out),
            Tabs(tabs) => tabs.iter().for_each(|t| collect_links(t.blocks, out)),
            _ => {}
        }
    }
}
