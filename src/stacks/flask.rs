//! Flask template: application-factory layout with blueprints. The
//! skeleton declares the `__init__.py` placeholders as empty files; some
//! of those exact paths are later overwritten with real content.

use crate::config::{ProjectConfig, TestingFramework};
use crate::template::{DirectoryStructure, Template, TemplateFile};

use super::content;

pub fn template() -> Template {
    Template {
        name: "Flask",
        description: "Python Web Framework",
        structure: structure(),
        files: files(),
    }
}

fn structure() -> DirectoryStructure {
    DirectoryStructure::new()
        .dir(
            "app",
            DirectoryStructure::new()
                .file("__init__.py")
                .dir(
                    "routes",
                    DirectoryStructure::new().file("__init__.py").file("main.py"),
                )
                .dir("models", DirectoryStructure::new().file("__init__.py"))
                .dir("utils", DirectoryStructure::new().file("__init__.py")),
        )
        .dir(
            "tests",
            DirectoryStructure::new().file("__init__.py").file("test_main.py"),
        )
}

fn files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::computed("README.md", content::readme),
        TemplateFile::literal(".gitignore", GITIGNORE),
        TemplateFile::computed("requirements.txt", requirements),
        TemplateFile::literal("run.py", RUN_PY),
        TemplateFile::literal("config.py", CONFIG_PY),
        TemplateFile::literal("app/__init__.py", APP_INIT),
        TemplateFile::literal("app/routes/__init__.py", ""),
        TemplateFile::computed("app/routes/main.py", main_routes),
        TemplateFile::literal("app/models/__init__.py", ""),
        TemplateFile::literal("app/utils/__init__.py", ""),
        TemplateFile::literal("tests/__init__.py", ""),
        TemplateFile::literal("tests/test_main.py", TESTS),
        TemplateFile::computed(".env.example", content::env_example),
        TemplateFile::literal("Dockerfile", DOCKERFILE).when(super::docker_enabled),
        TemplateFile::computed("docker-compose.yml", docker_compose).when(super::docker_enabled),
        TemplateFile::computed(".github/workflows/ci.yml", content::github_workflow)
            .when(super::ci_enabled),
    ]
}

fn requirements(config: &ProjectConfig) -> String {
    let mut deps = String::from("Flask==3.0.0\npython-dotenv==1.0.0\n");
    if config.features.testing == TestingFramework::Pytest {
        deps.push_str("pytest==7.4.3\npytest-flask==1.3.0\n");
    }
    deps
}

fn main_routes(config: &ProjectConfig) -> String {
    format!(
        "from flask import Blueprint, jsonify\n\nmain_bp = Blueprint('main', __name__)\n\n\n@main_bp.route('/')\ndef index():\n    return jsonify({{\n        'message': 'Welcome to {} API!',\n        'status': 'running'\n    }})\n\n\n@main_bp.route('/api/health')\ndef health():\n    return jsonify({{\n        'status': 'healthy'\n    }})\n",
        config.name
    )
}

fn docker_compose(config: &ProjectConfig) -> String {
    format!(
        "services:\n  {}:\n    build: .\n    ports:\n      - '5000:5000'\n    environment:\n      - FLASK_ENV=development\n",
        config.name
    )
}

const GITIGNORE: &str = "# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
venv/
env/
ENV/

# Flask
instance/
.webassets-cache

# Testing
.pytest_cache/
.coverage
htmlcov/

# IDE
.vscode/
.idea/

# Environment
.env
.env.local
";

const RUN_PY: &str = "from app import create_app
import os

app = create_app()

if __name__ == '__main__':
    port = int(os.getenv('PORT', 5000))
    debug = os.getenv('FLASK_ENV') == 'development'
    app.run(host='0.0.0.0', port=port, debug=debug)
";

const CONFIG_PY: &str = "import os
from dotenv import load_dotenv

load_dotenv()


class Config:
    \"\"\"Base configuration\"\"\"
    SECRET_KEY = os.getenv('SECRET_KEY', 'dev-secret-key')
    DEBUG = False
    TESTING = False


class DevelopmentConfig(Config):
    \"\"\"Development configuration\"\"\"
    DEBUG = True


class ProductionConfig(Config):
    \"\"\"Production configuration\"\"\"
    DEBUG = False


class TestingConfig(Config):
    \"\"\"Testing configuration\"\"\"
    TESTING = True


config = {
    'development': DevelopmentConfig,
    'production': ProductionConfig,
    'testing': TestingConfig,
    'default': DevelopmentConfig
}
";

const APP_INIT: &str = "from flask import Flask
import os


def create_app(config_name=None):
    \"\"\"Application factory\"\"\"
    app = Flask(__name__)

    # Load configuration
    if config_name is None:
        config_name = os.getenv('FLASK_ENV', 'development')

    from config import config
    app.config.from_object(config[config_name])

    # Register blueprints
    from app.routes.main import main_bp
    app.register_blueprint(main_bp)

    return app
";

const TESTS: &str = "import pytest
from app import create_app


@pytest.fixture
def app():
    app = create_app('testing')
    return app


@pytest.fixture
def client(app):
    return app.test_client()


def test_index(client):
    response = client.get('/')
    assert response.status_code == 200
    data = response.get_json()
    assert 'message' in data


def test_health(client):
    response = client.get('/api/health')
    assert response.status_code == 200
    data = response.get_json()
    assert data['status'] == 'healthy'
";

const DOCKERFILE: &str = "FROM python:3.11-slim
WORKDIR /app
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt
COPY . .
EXPOSE 5000
CMD [\"python\", \"run.py\"]
";
