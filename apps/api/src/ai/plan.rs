//! Local fallback for `POST /ai/learning-plan`: a canned curriculum per
//! target area, personalized with "gap" steps taken from the skills most
//! frequent among same-area peers that the requesting profile lacks.

use serde::{Deserialize, Serialize};

use crate::ai::ProfileSketch;
use crate::models::Profile;

pub const MAX_GAP_STEPS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    pub id: String,
    pub titulo: String,
    pub tipo: String,
    pub duracao_horas: u32,
    pub foco: String,
    pub conteudo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub objetivo: String,
    pub area_alvo: String,
    pub nivel_atual: String,
    pub trilha: Vec<PlanStep>,
    pub observacoes: Vec<String>,
}

fn step(id: &str, titulo: &str, tipo: &str, horas: u32, foco: &str, conteudo: &str) -> PlanStep {
    PlanStep {
        id: id.to_string(),
        titulo: titulo.to_string(),
        tipo: tipo.to_string(),
        duracao_horas: horas,
        foco: foco.to_string(),
        conteudo: conteudo.to_string(),
    }
}

/// The base curriculum for an area; unknown areas get the generic track.
pub fn base_path(area: &str) -> Vec<PlanStep> {
    match area {
        "Desenvolvimento" => vec![
            step(
                "dev-1",
                "Fundamentos de lógica de programação",
                "curso",
                8,
                "Lógica, variáveis, estruturas de decisão e repetição",
                "Nesta aula, você vai entender o que é lógica de programação, como pensar em \
                 passos, criar algoritmos simples e usar estruturas como if/else e laços de \
                 repetição. A ideia é aprender a traduzir problemas do dia a dia em uma sequência \
                 de instruções que o computador consiga executar.",
            ),
            step(
                "dev-2",
                "JavaScript moderno e DOM",
                "curso",
                12,
                "JS moderno, DOM, chamadas HTTP e boas práticas",
                "Aqui você vai aprender a base de JavaScript moderno (let/const, funções, arrays, \
                 objetos) e como manipular o DOM para criar páginas interativas. Também verá como \
                 fazer requisições HTTP simples para buscar dados de uma API.",
            ),
            step(
                "dev-3",
                "Projeto prático: mini aplicação React + API",
                "projeto",
                10,
                "Construir uma aplicação integrada a uma API REST",
                "Você vai montar uma pequena aplicação React que consome uma API REST, exibindo e \
                 filtrando dados. O foco é praticar componentes, estado e efeitos, conectando o \
                 front-end a um backend simples.",
            ),
        ],
        "Dados" => vec![
            step(
                "data-1",
                "Excel/Planilhas para análise de dados",
                "curso",
                6,
                "Tabelas, filtros, fórmulas e gráficos básicos",
                "Nesta etapa você aprende a organizar dados em planilhas, usar filtros, fórmulas \
                 básicas (SOMA, MÉDIA, SE) e criar gráficos simples. É a base para qualquer \
                 trabalho de análise de dados.",
            ),
            step(
                "data-2",
                "Introdução a SQL para análise",
                "curso",
                10,
                "SELECT, filtros, agregações e JOINs",
                "Aqui você entra no mundo de bancos de dados relacionais. Vai aprender a escrever \
                 consultas SQL para buscar, filtrar, agrupar e combinar tabelas usando JOINs. Tudo \
                 com exemplos práticos de análise.",
            ),
            step(
                "data-3",
                "Python para análise de dados",
                "curso",
                12,
                "Pandas, visualização e limpeza de dados",
                "Você vai conhecer o ecossistema de dados em Python, com foco em Pandas para \
                 manipulação de tabelas, limpeza de dados e criação de visualizações simples para \
                 tirar insights.",
            ),
        ],
        "Design" => vec![
            step(
                "design-1",
                "Fundamentos de UX e UI",
                "curso",
                8,
                "Princípios de usabilidade, hierarquia visual e UI patterns",
                "Nesta aula você entende o que é UX e UI, aprende princípios de usabilidade, \
                 hierarquia visual, contraste, tipografia e padrões comuns de interface que tornam \
                 um produto fácil de usar.",
            ),
            step(
                "design-2",
                "Figma na prática",
                "curso",
                10,
                "Wireframes, protótipos navegáveis e handoff",
                "Você vai criar telas no Figma desde o rascunho até um protótipo navegável, \
                 aprendendo a usar componentes, auto layout e recursos básicos para colaboração e \
                 handoff para desenvolvedores.",
            ),
            step(
                "design-3",
                "Projeto prático: protótipo de app completo",
                "projeto",
                10,
                "Criar o fluxo completo de um produto digital",
                "Aqui o foco é aplicar tudo que foi aprendido montando o fluxo completo de um \
                 aplicativo: mapa de navegação, telas principais, estados de erro e feedback para o \
                 usuário.",
            ),
        ],
        "Infraestrutura" => vec![
            step(
                "infra-1",
                "Fundamentos de redes e sistemas",
                "curso",
                8,
                "Conceitos de rede, servidores, sistemas operacionais",
                "Você vai revisar conceitos básicos de redes (IP, DNS, HTTP), entender o papel de \
                 servidores e noções de sistemas operacionais voltadas para o dia a dia de quem \
                 cuida de infraestrutura.",
            ),
            step(
                "infra-2",
                "Introdução a Docker e containers",
                "curso",
                8,
                "Containers, imagens e orquestração básica",
                "Nesta etapa você aprende o que são containers, como criar imagens, rodar serviços \
                 com Docker e organizar o ambiente de desenvolvimento de forma mais previsível.",
            ),
            step(
                "infra-3",
                "CI/CD na prática",
                "curso",
                8,
                "Pipelines de build, teste e deploy automatizado",
                "Você vai entender o conceito de integração contínua e entrega contínua, \
                 configurando um pipeline simples que executa testes e faz deploy automatizado em \
                 um ambiente de teste.",
            ),
        ],
        _ => vec![
            step(
                "base-1",
                "Fundamentos digitais e colaboração online",
                "curso",
                4,
                "Organização, comunicação e produtividade digital",
                "Nesta aula você aprende boas práticas de organização de arquivos, comunicação \
                 assíncrona e uso de ferramentas colaborativas como e-mail, chats e documentos \
                 compartilhados.",
            ),
            step(
                "base-2",
                "Lógica de resolução de problemas",
                "curso",
                6,
                "Raciocínio lógico aplicado ao trabalho",
                "Você vai praticar técnicas simples para decompor problemas, analisar causas e \
                 pensar em soluções passo a passo, aplicando isso em situações reais do dia a dia \
                 profissional.",
            ),
        ],
    }
}

/// Current level is a plain function of how many technical skills the card
/// already lists.
pub fn nivel_for(skills_count: usize) -> &'static str {
    match skills_count {
        0 => "iniciante",
        1..=5 => "intermediário",
        _ => "avançado",
    }
}

/// Skills the requester lacks, ordered by how often they appear among peers
/// (frequency descending, ties by first appearance), capped at
/// [`MAX_GAP_STEPS`].
pub fn gap_skills(user_skills: &[String], peers: &[Profile]) -> Vec<String> {
    // Frequency count in a vec to keep first-seen order for ties.
    let mut freq: Vec<(String, u32)> = Vec::new();
    for peer in peers {
        for skill in &peer.habilidades_tecnicas {
            let key = skill.trim();
            if key.is_empty() {
                continue;
            }
            match freq.iter_mut().find(|(s, _)| s == key) {
                Some((_, count)) => *count += 1,
                None => freq.push((key.to_string(), 1)),
            }
        }
    }

    let owned: Vec<String> = user_skills.iter().map(|s| s.trim().to_string()).collect();
    let mut gaps: Vec<(String, u32)> = freq
        .into_iter()
        .filter(|(skill, _)| !owned.contains(skill))
        .collect();
    gaps.sort_by(|a, b| b.1.cmp(&a.1));
    gaps.truncate(MAX_GAP_STEPS);
    gaps.into_iter().map(|(skill, _)| skill).collect()
}

fn gap_step(index: usize, skill: &str) -> PlanStep {
    step(
        &format!("gap-{index}-{}", skill.to_lowercase()),
        &format!("Prática guiada em {skill}"),
        "curso",
        4,
        &format!("Desenvolver {skill} a partir de exemplos práticos e exercícios introdutórios."),
        &format!(
            "Nesta etapa você foca em {skill}. Comece entendendo o conceito, depois veja exemplos \
             simples e, por fim, tente aplicar em um mini projeto pessoal. Use materiais curtos \
             (vídeos ou artigos) e anote dúvidas para revisar com a mentoria."
        ),
    )
}

pub fn build_local_plan(
    sketch: &ProfileSketch,
    objetivo: &str,
    area: &str,
    peers: &[Profile],
) -> LearningPlan {
    let mut trilha = base_path(area);
    for (index, skill) in gap_skills(&sketch.habilidades_tecnicas, peers)
        .iter()
        .enumerate()
    {
        trilha.push(gap_step(index, skill));
    }

    LearningPlan {
        objetivo: objetivo.to_string(),
        area_alvo: area.to_string(),
        nivel_atual: nivel_for(sketch.habilidades_tecnicas.len()).to_string(),
        trilha,
        observacoes: vec![
            "Plano gerado com base na área informada e nas habilidades mais comuns entre outros \
             perfis cadastrados."
                .to_string(),
            "Os módulos extras destacam skills em alta que ainda não aparecem no seu card."
                .to_string(),
            "Ao configurar OPENAI_API_KEY no backend, o plano passa a ser refinado e reescrito \
             por IA."
                .to_string(),
        ],
    }
}
