/// Browser tab title of the HTML page.
pub const DOCUMENT_TITLE: &str = "Painel de Vagas - Vagas.com";
/// Rendered page, written to the working directory.
pub const HTML_FILENAME: &str = "painel_vagas.html";

pub const BAR_COLOR: &str = "teal";
/// X-axis label rotation of the location chart, in degrees.
pub const LABEL_ROTATION_DEG: i32 = 45;

pub const WORD_HEADERS: [&str; 2] = ["Palavra", "Frequência"];
pub const REQUIREMENT_HEADERS: [&str; 2] = ["Requisito", "Frequência"];

pub const LOADING_TEXT: &str = "Carregando vagas...";
pub const COMMAND_HINT: &str = "[r] atualizar  [c] limpar cache e buscar de novo  [q] sair";
