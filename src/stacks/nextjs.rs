//! Next.js template: App Router, TypeScript, Tailwind, a sample API
//! route, all under a single project root.

use serde_json::json;

use crate::config::{ProjectConfig, TestingFramework};
use crate::template::{DirectoryStructure, Template, TemplateFile};

use super::content;

pub fn template() -> Template {
    Template {
        name: "Next.js",
        description: "Full-stack React framework with SSR",
        structure: structure(),
        files: files(),
    }
}

fn structure() -> DirectoryStructure {
    DirectoryStructure::new()
        .dir(
            "src",
            DirectoryStructure::new()
                .dir(
                    "app",
                    DirectoryStructure::new()
                        .dir("api", DirectoryStructure::new())
                        .dir(
                            "components",
                            DirectoryStructure::new().dir("shared", DirectoryStructure::new()),
                        ),
                )
                .dir("lib", DirectoryStructure::new())
                .dir("types", DirectoryStructure::new())
                .dir("utils", DirectoryStructure::new()),
        )
        .dir("public", DirectoryStructure::new())
}

fn files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::computed("README.md", content::readme),
        TemplateFile::literal(".gitignore", GITIGNORE),
        TemplateFile::computed("package.json", package_json),
        TemplateFile::literal("tsconfig.json", TSCONFIG),
        TemplateFile::literal("next.config.js", NEXT_CONFIG),
        TemplateFile::literal("tailwind.config.ts", TAILWIND_CONFIG),
        TemplateFile::literal("postcss.config.js", POSTCSS_CONFIG),
        TemplateFile::literal(".prettierrc", content::PRETTIERRC).when(super::prettier_enabled),
        TemplateFile::literal("Dockerfile", DOCKERFILE).when(super::docker_enabled),
        TemplateFile::computed("docker-compose.yml", docker_compose).when(super::docker_enabled),
        TemplateFile::computed(".github/workflows/ci.yml", content::github_workflow)
            .when(super::ci_enabled),
        TemplateFile::computed("src/app/layout.tsx", layout),
        TemplateFile::computed("src/app/page.tsx", page),
        TemplateFile::literal("src/app/globals.css", GLOBALS_CSS),
        TemplateFile::literal("src/app/api/hello/route.ts", API_ROUTE),
        TemplateFile::computed(".env.example", content::env_example),
    ]
}

fn package_json(config: &ProjectConfig) -> String {
    let mut scripts = json!({
        "dev": "next dev",
        "build": "next build",
        "start": "next start",
    });
    let mut dev_deps = json!({
        "typescript": "^5.3.3",
        "@types/node": "^20.11.5",
        "@types/react": "^18.2.45",
        "@types/react-dom": "^18.2.18",
        "autoprefixer": "^10.4.16",
        "postcss": "^8.4.32",
        "tailwindcss": "^3.4.0",
    });
    if config.features.eslint {
        scripts["lint"] = json!("next lint");
        dev_deps["eslint"] = json!("^8.56.0");
        dev_deps["eslint-config-next"] = json!("^14.0.4");
    }
    if config.features.prettier {
        dev_deps["prettier"] = json!("^3.2.4");
    }
    match config.features.testing {
        TestingFramework::Jest => {
            scripts["test"] = json!("jest");
            dev_deps["jest"] = json!("^29.7.0");
        }
        TestingFramework::Vitest => {
            scripts["test"] = json!("vitest run");
            dev_deps["vitest"] = json!("^1.2.0");
        }
        _ => {}
    }

    let manifest = json!({
        "name": config.name,
        "version": "0.1.0",
        "private": true,
        "scripts": scripts,
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "next": "^14.0.4",
        },
        "devDependencies": dev_deps,
    });
    super::pretty(&manifest)
}

fn layout(config: &ProjectConfig) -> String {
    format!(
        r#"import type {{ Metadata }} from 'next'
import './globals.css'

export const metadata: Metadata = {{
  title: '{title}',
  description: '{description}',
}}

export default function RootLayout({{
  children,
}}: {{
  children: React.ReactNode
}}) {{
  return (
    <html lang="en">
      <body>{{children}}</body>
    </html>
  )
}}
"#,
        title = config.pascal_name(),
        description = if config.description.is_empty() { "Created with stackforge" } else { &config.description },
    )
}

fn page(config: &ProjectConfig) -> String {
    format!(
        r#"'use client'

import {{ useEffect, useState }} from 'react'

export default function Home() {{
  const [message, setMessage] = useState('')

  useEffect(() => {{
    fetch('/api/hello')
      .then(res => res.json())
      .then(data => setMessage(data.message))
  }}, [])

  return (
    <main className="flex min-h-screen flex-col items-center justify-center p-24">
      <div className="text-center">
        <h1 className="text-4xl font-bold mb-4">
          {title}
        </h1>
        <p className="text-xl text-gray-600">
          {{message || 'Loading...'}}
        </p>
      </div>
    </main>
  )
}}
"#,
        title = config.pascal_name(),
    )
}

fn docker_compose(config: &ProjectConfig) -> String {
    format!(
        "services:\n  {}:\n    build: .\n    ports:\n      - '3000:3000'\n",
        config.name
    )
}

const GITIGNORE: &str = "node_modules/
.next/
dist/
.env
.env.local
*.log
.DS_Store
coverage/
";

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2017",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [
      {
        "name": "next"
      }
    ],
    "paths": {
      "@/*": ["./src/*"]
    }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}
"#;

const NEXT_CONFIG: &str = "/** @type {import('next').NextConfig} */
const nextConfig = {}

module.exports = nextConfig
";

const TAILWIND_CONFIG: &str = "import type { Config } from 'tailwindcss'

const config: Config = {
  content: [
    './src/pages/**/*.{js,ts,jsx,tsx,mdx}',
    './src/components/**/*.{js,ts,jsx,tsx,mdx}',
    './src/app/**/*.{js,ts,jsx,tsx,mdx}',
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
export default config
";

const POSTCSS_CONFIG: &str = "module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
";

const GLOBALS_CSS: &str = "@tailwind base;
@tailwind components;
@tailwind utilities;

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}
";

const API_ROUTE: &str = "import { NextResponse } from 'next/server'

export async function GET() {
  return NextResponse.json({
    message: 'Hello from Next.js API!',
    timestamp: new Date().toISOString(),
  })
}
";

const DOCKERFILE: &str = "FROM node:20-alpine
WORKDIR /app
COPY package*.json ./
RUN npm install
COPY . .
RUN npm run build
EXPOSE 3000
CMD [\"npm\", \"start\"]
";
