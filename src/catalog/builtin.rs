//! Built-in catalog shipped with the application
//!
//! These entries are read-only: the record store never mutates or removes
//! them, and their ids are reserved.

use super::model::{Category, Tool, ToolData};

struct Entry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    link: &'static str,
    category: Category,
    initial_likes: u64,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "1",
        title: "VS Code",
        description: "A powerful, lightweight code editor for developers.",
        image: "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9a/Visual_Studio_Code_1.35_icon.svg/2048px-Visual_Studio_Code_1.35_icon.svg.png",
        link: "https://code.visualstudio.com/",
        category: Category::Development,
        initial_likes: 1250,
    },
    Entry {
        id: "2",
        title: "Figma",
        description: "The collaborative interface design tool.",
        image: "https://upload.wikimedia.org/wikipedia/commons/3/33/Figma-logo.svg",
        link: "https://www.figma.com/",
        category: Category::Design,
        initial_likes: 980,
    },
    Entry {
        id: "3",
        title: "ChatGPT",
        description: "An AI-powered chatbot by OpenAI.",
        image: "https://upload.wikimedia.org/wikipedia/commons/0/04/ChatGPT_logo.svg",
        link: "https://chat.openai.com/",
        category: Category::Ai,
        initial_likes: 2500,
    },
    Entry {
        id: "4",
        title: "Tailwind CSS",
        description: "A utility-first CSS framework for rapid UI development.",
        image: "https://upload.wikimedia.org/wikipedia/commons/d/d5/Tailwind_CSS_Logo.svg",
        link: "https://tailwindcss.com/",
        category: Category::Development,
        initial_likes: 850,
    },
    Entry {
        id: "5",
        title: "Canva",
        description: "A graphic design platform that allows users to create social media graphics, presentations, posters, documents and other visual content.",
        image: "https://upload.wikimedia.org/wikipedia/commons/0/08/Canva_icon_2021.svg",
        link: "https://www.canva.com/",
        category: Category::Design,
        initial_likes: 1100,
    },
    Entry {
        id: "6",
        title: "Notion",
        description: "A workspace for your team to write, plan, and get organized.",
        image: "https://upload.wikimedia.org/wikipedia/commons/4/45/Notion_app_logo.png",
        link: "https://www.notion.so/",
        category: Category::Productivity,
        initial_likes: 1400,
    },
    Entry {
        id: "7",
        title: "Midjourney",
        description: "An independent research lab exploring new mediums of thought and expanding the imaginative powers of the human species.",
        image: "https://upload.wikimedia.org/wikipedia/commons/e/ed/Midjourney_Emblem.png",
        link: "https://www.midjourney.com/",
        category: Category::Ai,
        initial_likes: 1800,
    },
    Entry {
        id: "8",
        title: "Vercel",
        description: "Develop. Preview. Ship. For the best frontend teams.",
        image: "https://assets.vercel.com/image/upload/v1588805858/repositories/vercel/logo.png",
        link: "https://vercel.com/",
        category: Category::Development,
        initial_likes: 920,
    },
    Entry {
        id: "9",
        title: "Dribbble",
        description: "The leading destination to find & showcase creative work and home to the world's best design professionals.",
        image: "https://cdn.freebiesupply.com/logos/large/2x/dribbble-icon-1-logo-png-transparent.png",
        link: "https://dribbble.com/",
        category: Category::Design,
        initial_likes: 750,
    },
    Entry {
        id: "10",
        title: "Linear",
        description: "The issue tracking tool you'll enjoy using.",
        image: "https://upload.wikimedia.org/wikipedia/commons/e/e6/Linear_logo.svg",
        link: "https://linear.app/",
        category: Category::Productivity,
        initial_likes: 600,
    },
];

/// The built-in tools, in catalog order
pub fn builtin_tools() -> Vec<Tool> {
    ENTRIES
        .iter()
        .map(|e| {
            Tool::new(
                e.id,
                ToolData {
                    title: e.title.to_string(),
                    description: e.description.to_string(),
                    image: e.image.to_string(),
                    link: e.link.to_string(),
                    category: e.category,
                    initial_likes: e.initial_likes,
                },
            )
        })
        .collect()
}
