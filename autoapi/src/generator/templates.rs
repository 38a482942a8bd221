//! Embedded Handlebars templates and the renderer that fills them
//!
//! Rendering is pure: [`TemplateRenderer::render`] maps an artifact kind and
//! a request to text without touching paths or the filesystem.
//!
//! Fully-qualified class names are precomputed into the context because a
//! backslash directly before `{{` is an escape in Handlebars.

use handlebars::Handlebars;
use serde_json::json;

use super::artifact::ArtifactKind;
use super::helpers::TemplateHelpers;
use super::request::GenerationRequest;
use crate::config::{GeneratorConfig, NamespaceSettings};
use crate::error::{AutoApiError, Result};

/// API controller template
pub const CONTROLLER_TEMPLATE: &str = r##"<?php

namespace {{controller_namespace}};

use {{model_class}};
use Illuminate\Http\Request;

class {{controller_name}} extends Controller
{
    public function __construct()
    {
        $this->middleware({{middleware_array}});
    }

    public function index(Request $request)
    {
{{#if search_enabled}}
        $query = {{model_name}}::query();

        if ($search = $request->query('search')) {
            $query->search($search);
        }

        return response()->json(['data' => $query->get()]);
{{else}}
        return response()->json(['data' => {{model_name}}::all()]);
{{/if}}
    }

    public function show($id)
    {
        $record = {{model_name}}::find($id);
        return $record ? response()->json(['data' => $record]) : response()->json(['message' => 'Not found'], 404);
    }

    public function store(Request $request)
    {
        $record = {{model_name}}::create($request->all());
        return response()->json(['data' => $record], 201);
    }

    public function update(Request $request, $id)
    {
        $record = {{model_name}}::find($id);
        if (!$record) {
            return response()->json(['message' => 'Not found'], 404);
        }

        $record->update($request->all());
        return response()->json(['data' => $record]);
    }

    public function destroy($id)
    {
        $record = {{model_name}}::find($id);
        if (!$record) {
            return response()->json(['message' => 'Not found'], 404);
        }

        $record->delete();
        return response()->json(null, 204);
    }
{{#if soft_deletes}}

    public function restore($id)
    {
        $record = {{model_name}}::withTrashed()->find($id);
        if (!$record) {
            return response()->json(['message' => 'Not found'], 404);
        }

        $record->restore();
        return response()->json(['data' => $record]);
    }
{{/if}}
}
"##;

/// Route group appended to the shared routes file
pub const ROUTES_TEMPLATE: &str = r##"Route::prefix('{{version}}')
    ->group(function () {
        Route::apiResource('/{{route_segment}}', {{controller_class}}::class){{middleware_chain}};
{{#if soft_deletes}}
        Route::post('/{{route_segment}}/{id}/restore', [{{controller_class}}::class, 'restore']){{middleware_chain}};
{{/if}}
    });"##;

/// Eloquent model template
pub const MODEL_TEMPLATE: &str = r##"<?php

namespace {{model_namespace}};

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;
{{#if soft_deletes}}
use Illuminate\Database\Eloquent\SoftDeletes;
{{/if}}

class {{model_name}} extends Model
{
    use HasFactory{{#if soft_deletes}}, SoftDeletes{{/if}};

    protected $table = '{{route_segment}}';

    protected $fillable = {{fillable_array}};
{{#if search_enabled}}

    public function scopeSearch($query, string $term)
    {
        return $query->where(function ($query) use ($term) {
{{#each searchable_fields}}
            $query->{{#if @first}}where{{else}}orWhere{{/if}}('{{this}}', 'like', "%{$term}%");
{{/each}}
        });
    }
{{/if}}
}
"##;

/// Anonymous-class migration template
pub const MIGRATION_TEMPLATE: &str = r##"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    public function up(): void
    {
        Schema::create('{{route_segment}}', function (Blueprint $table) {
            $table->id();
{{#each fields}}
            $table->{{type}}('{{name}}');
{{/each}}
{{#if soft_deletes}}
            $table->softDeletes();
{{/if}}
            $table->timestamps();
        });
    }

    public function down(): void
    {
        Schema::dropIfExists('{{route_segment}}');
    }
};
"##;

/// Renders artifacts for a request
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
    namespaces: NamespaceSettings,
    openapi_version: String,
}

impl TemplateRenderer {
    /// Create a renderer with all templates registered
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Generating PHP, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, template) in [
            ("controller", CONTROLLER_TEMPLATE),
            ("routes", ROUTES_TEMPLATE),
            ("model", MODEL_TEMPLATE),
            ("migration", MIGRATION_TEMPLATE),
        ] {
            handlebars
                .register_template_string(name, template)
                .map_err(|e| AutoApiError::TemplateRegistration(Box::new(e)))?;
        }

        Ok(Self {
            handlebars,
            namespaces: config.namespaces.clone(),
            openapi_version: config.defaults.openapi_version.clone(),
        })
    }

    /// Render one artifact
    ///
    /// The routes block is framed by newlines so consecutive appends stay
    /// separated.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering or JSON serialization fails.
    pub fn render(&self, kind: ArtifactKind, request: &GenerationRequest) -> Result<String> {
        tracing::debug!(%kind, model = %request.model_name, "rendering artifact");

        match kind {
            ArtifactKind::Model => self.render_template("model", request),
            ArtifactKind::Migration => self.render_template("migration", request),
            ArtifactKind::Controller => self.render_template("controller", request),
            ArtifactKind::Routes => {
                let block = self.render_template("routes", request)?;
                Ok(format!("\n{}\n", block.trim_end()))
            }
            ArtifactKind::OpenApi => self.render_openapi(request),
        }
    }

    fn render_template(&self, name: &str, request: &GenerationRequest) -> Result<String> {
        let context = self.context(request);
        Ok(self.handlebars.render(name, &context)?)
    }

    fn render_openapi(&self, request: &GenerationRequest) -> Result<String> {
        let document = json!({
            "openapi": self.openapi_version,
            "info": {
                "title": format!("{} API", request.model_name),
                "version": request.version,
            },
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Template variables for a request
    fn context(&self, request: &GenerationRequest) -> serde_json::Value {
        let model_name = request.model_name.as_str();
        let controller_name = request.controller_name();
        let fields = request.parsed_fields();
        let field_names: Vec<String> = fields.iter().map(|f| f.name.clone()).collect();

        let middleware_chain = if request.middleware.is_empty() {
            String::new()
        } else {
            format!(
                "->middleware({})",
                TemplateHelpers::php_string_array(&request.middleware)
            )
        };

        json!({
            "model_name": model_name,
            "model_namespace": self.namespaces.models,
            "model_class": format!("{}\\{model_name}", self.namespaces.models),
            "controller_name": controller_name,
            "controller_namespace": self.namespaces.controllers,
            "controller_class": format!("\\{}\\{controller_name}", self.namespaces.controllers),
            "route_segment": request.route_segment(),
            "version": request.version,
            "fields": fields,
            "fillable_array": TemplateHelpers::php_string_array(&field_names),
            "middleware_array": TemplateHelpers::php_string_array(&request.middleware),
            "middleware_chain": middleware_chain,
            "soft_deletes": request.soft_deletes,
            "search_enabled": request.search_enabled,
            "searchable_fields": request.resolved_searchable_fields(),
        })
    }
}
