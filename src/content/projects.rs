//! Project carousel entries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    AiMl,
    Blockchain,
    Web,
    Data,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::AiMl => "AI/ML",
            ProjectCategory::Blockchain => "Blockchain",
            ProjectCategory::Web => "Web Dev",
            ProjectCategory::Data => "Data Engineering",
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub categories: &'static [ProjectCategory],
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub featured: bool,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Leet2Git",
        description: "Chrome extension that automates LeetCode submissions to GitHub",
        long_description: "A Chrome extension that automates code submissions \
            to GitHub, with content scripts for real-time page interaction, \
            background service workers for asynchronous data processing, and \
            OAuth for secure GitHub authentication.",
        categories: &[ProjectCategory::Web],
        technologies: &["Angular", "TypeScript", "Chrome Extension", "OAuth", "GitHub API"],
        github_url: "https://github.com/Omkarthipparthi/L2G",
        featured: true,
    },
    Project {
        title: "NL2SQL - Natural Language to SQL",
        description: "NLP system that translates human-readable queries into SQL commands",
        long_description: "A Natural Language Processing system translating \
            human-readable queries into structured SQL commands, backed by a \
            ChromaDB vector database of vectorized schemas and trained \
            queries and evaluated against Spider 2.0 benchmarking datasets.",
        categories: &[ProjectCategory::AiMl, ProjectCategory::Data],
        technologies: &["Python", "NLP", "ChromaDB", "LLMs", "SQL", "Spider 2.0"],
        github_url: "https://github.com/Omkarthipparthi/NL2SQL",
        featured: true,
    },
    Project {
        title: "Money Management Using Blockchain",
        description: "Decentralized app for automated ether distribution to wallets",
        long_description: "A decentralized money management application on \
            the Ethereum test network that distributes ether automatically to \
            designated wallets based on customizable parameters such as asset \
            percentages, dates, or times.",
        categories: &[ProjectCategory::Blockchain],
        technologies: &["Solidity", "Ethereum", "MetaMask", "Ropsten", "Smart Contracts"],
        github_url: "https://github.com/Omkarthipparthi/MoneyManagement",
        featured: false,
    },
    Project {
        title: "Decentralized Supply Chain Management",
        description: "Blockchain-based product lifecycle management using Hyperledger Fabric",
        long_description: "A decentralized supply chain management system \
            built on Hyperledger Fabric, focused on product lifecycle \
            management and ownership transfer, with smart contracts in Go \
            tracking products across multiple organizations.",
        categories: &[ProjectCategory::Blockchain],
        technologies: &["Hyperledger Fabric", "Go", "Docker", "Smart Contracts"],
        github_url: "https://github.com/Omkarthipparthi/CSE598-EBA-Project2",
        featured: false,
    },
    Project {
        title: "GradeDevils",
        description: "AI-powered grading platform using AWS and machine learning",
        long_description: "An AI-powered grading platform using AWS Lambda, \
            DynamoDB, S3, Bedrock, and SageMaker to automate grading \
            workflows, with ML pipelines that classify and score student \
            submissions using supervised learning techniques.",
        categories: &[ProjectCategory::AiMl, ProjectCategory::Web],
        technologies: &["AWS Lambda", "DynamoDB", "S3", "SageMaker", "Bedrock", "Python"],
        github_url: "https://github.com/Omkarthipparthi/GradeDevils",
        featured: true,
    },
    Project {
        title: "Multi-label Text Classification",
        description: "Deep learning models with attention mechanisms for text classification",
        long_description: "Multi-label text classification models integrating \
            BiLSTM, CNN, and multi-head attention mechanisms, achieving a \
            Micro F1 score of 0.85 and 88% accuracy on benchmark datasets \
            using GloVe and BERT embeddings.",
        categories: &[ProjectCategory::AiMl, ProjectCategory::Data],
        technologies: &["TensorFlow", "BiLSTM", "CNN", "BERT", "GloVe", "Python"],
        github_url: "",
        featured: false,
    },
];
