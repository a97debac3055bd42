//! MERN template: MongoDB + Express + React + Node.js, split into
//! independent client and server roots.
//!
//! The server subtree of this template (plus the fixed root files) is
//! also the source of the derived express template.

use serde_json::json;

use crate::config::{ProjectConfig, TestingFramework};
use crate::template::{DirectoryStructure, Template, TemplateFile};

use super::content;

pub fn template() -> Template {
    Template {
        name: "MERN",
        description: "MongoDB + Express + React + Node.js",
        structure: structure(),
        files: files(),
    }
}

fn structure() -> DirectoryStructure {
    DirectoryStructure::new()
        .dir(
            "client",
            DirectoryStructure::new()
                .dir(
                    "src",
                    DirectoryStructure::new()
                        .dir(
                            "components",
                            DirectoryStructure::new()
                                .dir("pages", DirectoryStructure::new())
                                .dir("shared", DirectoryStructure::new()),
                        )
                        .dir("context", DirectoryStructure::new())
                        .dir("hooks", DirectoryStructure::new())
                        .dir("lib", DirectoryStructure::new())
                        .dir("types", DirectoryStructure::new())
                        .dir("utils", DirectoryStructure::new()),
                )
                .dir("public", DirectoryStructure::new()),
        )
        .dir(
            "server",
            DirectoryStructure::new().dir(
                "src",
                DirectoryStructure::new()
                    .dir("controllers", DirectoryStructure::new())
                    .dir("models", DirectoryStructure::new())
                    .dir("routes", DirectoryStructure::new())
                    .dir("middleware", DirectoryStructure::new())
                    .dir("utils", DirectoryStructure::new())
                    .dir("config", DirectoryStructure::new()),
            ),
        )
}

fn files() -> Vec<TemplateFile> {
    vec![
        // Root files (shared with the derived express template)
        TemplateFile::computed("README.md", content::readme),
        TemplateFile::literal(".gitignore", content::NODE_GITIGNORE),
        TemplateFile::computed(".env.example", content::env_example),
        // Feature-flagged root files
        TemplateFile::computed("docker-compose.yml", docker_compose).when(super::docker_enabled),
        TemplateFile::literal("client/Dockerfile", CLIENT_DOCKERFILE).when(super::docker_enabled),
        TemplateFile::literal("server/Dockerfile", SERVER_DOCKERFILE).when(super::docker_enabled),
        TemplateFile::computed(".github/workflows/ci.yml", content::github_workflow)
            .when(super::ci_enabled),
        TemplateFile::literal(".prettierrc", content::PRETTIERRC).when(super::prettier_enabled),
        // Client
        TemplateFile::computed("client/package.json", client_package_json),
        TemplateFile::literal("client/vite.config.ts", VITE_CONFIG),
        TemplateFile::literal("client/tsconfig.json", CLIENT_TSCONFIG),
        TemplateFile::computed("client/index.html", index_html),
        TemplateFile::literal("client/.eslintrc.json", content::ESLINT_RC)
            .when(super::eslint_enabled),
        TemplateFile::literal("client/src/main.tsx", MAIN_TSX),
        TemplateFile::computed("client/src/App.tsx", app_tsx),
        TemplateFile::literal("client/src/index.css", INDEX_CSS),
        TemplateFile::literal("client/.env.example", "VITE_API_URL=http://localhost:5000/api\n"),
        // Server
        TemplateFile::computed("server/package.json", server_package_json),
        TemplateFile::literal("server/tsconfig.json", SERVER_TSCONFIG),
        TemplateFile::literal("server/src/index.ts", SERVER_INDEX),
        TemplateFile::literal("server/src/config/database.ts", DATABASE_CONFIG),
        TemplateFile::literal("server/src/routes/index.ts", ROUTES),
        TemplateFile::literal("server/src/controllers/health.controller.ts", HEALTH_CONTROLLER),
        TemplateFile::literal("server/src/middleware/errorHandler.ts", ERROR_HANDLER),
        TemplateFile::computed("server/.env.example", content::env_example),
    ]
}

fn client_package_json(config: &ProjectConfig) -> String {
    let mut scripts = json!({
        "dev": "vite",
        "build": "tsc && vite build",
        "preview": "vite preview",
    });
    let mut dev_deps = json!({
        "@types/react": "^18.2.43",
        "@types/react-dom": "^18.2.17",
        "@vitejs/plugin-react": "^4.2.1",
        "typescript": "^5.2.2",
        "vite": "^5.0.8",
    });
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
    if config.features.eslint {
        dev_deps["eslint"] = json!("^8.56.0");
    }
    if config.features.prettier {
        dev_deps["prettier"] = json!("^3.2.4");
    }

    let manifest = json!({
        "name": "client",
        "private": true,
        "version": "0.0.0",
        "type": "module",
        "scripts": scripts,
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "axios": "^1.6.5",
            "react-router-dom": "^6.21.1",
        },
        "devDependencies": dev_deps,
    });
    super::pretty(&manifest)
}

fn server_package_json(config: &ProjectConfig) -> String {
    let mut scripts = json!({
        "dev": "tsx watch src/index.ts",
        "build": "tsc",
        "start": "node dist/index.js",
    });
    let mut dev_deps = json!({
        "@types/express": "^4.17.21",
        "@types/node": "^20.11.5",
        "@types/cors": "^2.8.17",
        "typescript": "^5.3.3",
        "tsx": "^4.7.0",
    });
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
        "name": "server",
        "version": "1.0.0",
        "type": "module",
        "scripts": scripts,
        "dependencies": {
            "express": "^4.18.2",
            "mongoose": "^8.0.4",
            "cors": "^2.8.5",
            "dotenv": "^16.3.1",
        },
        "devDependencies": dev_deps,
    });
    super::pretty(&manifest)
}

fn index_html(config: &ProjectConfig) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"UTF-8\" />\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n    <title>{}</title>\n  </head>\n  <body>\n    <div id=\"root\"></div>\n    <script type=\"module\" src=\"/src/main.tsx\"></script>\n  </body>\n</html>\n",
        config.pascal_name()
    )
}

fn app_tsx(config: &ProjectConfig) -> String {
    format!(
        r#"import {{ useState, useEffect }} from 'react'

function App() {{
  const [message, setMessage] = useState('')

  useEffect(() => {{
    fetch('http://localhost:5000/api/health')
      .then(res => res.json())
      .then(data => setMessage(data.message))
      .catch(err => console.error(err))
  }}, [])

  return (
    <div style={{{{ padding: '2rem', fontFamily: 'sans-serif' }}}}>
      <h1>{}</h1>
      <p>Server says: {{message || 'Loading...'}}</p>
    </div>
  )
}}

export default App
"#,
        config.pascal_name()
    )
}

fn docker_compose(config: &ProjectConfig) -> String {
    format!(
        "services:\n  mongo:\n    image: mongo:7\n    ports:\n      - '27017:27017'\n    volumes:\n      - mongo-data:/data/db\n\n  server:\n    build: ./server\n    ports:\n      - '5000:5000'\n    environment:\n      - MONGODB_URI=mongodb://mongo:27017/{}\n    depends_on:\n      - mongo\n\n  client:\n    build: ./client\n    ports:\n      - '5173:5173'\n    depends_on:\n      - server\n\nvolumes:\n  mongo-data:\n",
        config.name
    )
}

const VITE_CONFIG: &str = "import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
  server: {
    port: 5173,
  },
})
";

const CLIENT_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "useDefineForClassFields": true,
    "lib": ["ES2020", "DOM", "DOM.Iterable"],
    "module": "ESNext",
    "skipLibCheck": true,
    "moduleResolution": "bundler",
    "allowImportingTsExtensions": true,
    "resolveJsonModule": true,
    "isolatedModules": true,
    "noEmit": true,
    "jsx": "react-jsx",
    "strict": true,
    "noUnusedLocals": true,
    "noUnusedParameters": true,
    "noFallthroughCasesInSwitch": true
  },
  "include": ["src"]
}
"#;

const MAIN_TSX: &str = "import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.tsx'
import './index.css'

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
";

const INDEX_CSS: &str = "* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen,
    Ubuntu, Cantarell, sans-serif;
}
";

const SERVER_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "module": "ESNext",
    "moduleResolution": "node",
    "outDir": "./dist",
    "rootDir": "./src",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "resolveJsonModule": true
  },
  "include": ["src/**/*"],
  "exclude": ["node_modules"]
}
"#;

const SERVER_INDEX: &str = "import express from 'express';
import cors from 'cors';
import dotenv from 'dotenv';
import { connectDB } from './config/database.js';
import router from './routes/index.js';
import { errorHandler } from './middleware/errorHandler.js';

dotenv.config();

const app = express();
const PORT = process.env.PORT || 5000;

// Middleware
app.use(cors());
app.use(express.json());
app.use(express.urlencoded({ extended: true }));

// Routes
app.use('/api', router);

// Error handler
app.use(errorHandler);

// Start server
async function startServer() {
  try {
    await connectDB();
    app.listen(PORT, () => {
      console.log(`Server running on port ${PORT}`);
    });
  } catch (error) {
    console.error('Failed to start server:', error);
    process.exit(1);
  }
}

startServer();
";

const DATABASE_CONFIG: &str = "import mongoose from 'mongoose';

export async function connectDB() {
  try {
    const conn = await mongoose.connect(process.env.MONGODB_URI || 'mongodb://localhost:27017/app');
    console.log(`MongoDB connected: ${conn.connection.host}`);
  } catch (error) {
    console.error('MongoDB connection error:', error);
    process.exit(1);
  }
}
";

const ROUTES: &str = "import { Router } from 'express';
import { healthCheck } from '../controllers/health.controller.js';

const router = Router();

router.get('/health', healthCheck);

export default router;
";

const HEALTH_CONTROLLER: &str = "import { Request, Response } from 'express';

export function healthCheck(req: Request, res: Response) {
  res.json({
    status: 'ok',
    message: 'Server is running!',
    timestamp: new Date().toISOString(),
  });
}
";

const ERROR_HANDLER: &str = "import { Request, Response, NextFunction } from 'express';

export function errorHandler(
  err: Error,
  req: Request,
  res: Response,
  next: NextFunction
) {
  console.error(err.stack);
  res.status(500).json({
    status: 'error',
    message: err.message || 'Internal Server Error',
  });
}
";

const CLIENT_DOCKERFILE: &str = "FROM node:20-alpine
WORKDIR /app
COPY package*.json ./
RUN npm install
COPY . .
EXPOSE 5173
CMD [\"npm\", \"run\", \"dev\", \"--\", \"--host\"]
";

const SERVER_DOCKERFILE: &str = "FROM node:20-alpine
WORKDIR /app
COPY package*.json ./
RUN npm install
COPY . .
EXPOSE 5000
CMD [\"npm\", \"run\", \"dev\"]
";
