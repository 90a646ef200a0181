//! Per-area question bank (`GET /ai/quiz-bank`) and the adaptive session
//! walk over its three difficulty levels.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Iniciante,
    Intermediario,
    Avancado,
}

impl Level {
    pub const COUNT: usize = 3;

    fn index(self) -> usize {
        match self {
            Level::Iniciante => 0,
            Level::Intermediario => 1,
            Level::Avancado => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub nivel: Level,
    pub pergunta: String,
    pub alternativas: Vec<String>,
    pub correta_index: usize,
    pub explicacao: String,
}

fn q(
    id: &str,
    nivel: Level,
    pergunta: &str,
    alternativas: &[&str],
    correta_index: usize,
    explicacao: &str,
) -> Question {
    Question {
        id: id.to_string(),
        nivel,
        pergunta: pergunta.to_string(),
        alternativas: alternativas.iter().map(|a| a.to_string()).collect(),
        correta_index,
        explicacao: explicacao.to_string(),
    }
}

/// The question bank for an area; unknown areas get the generic bank.
pub fn bank_for(area: &str) -> Vec<Question> {
    use Level::{Avancado, Iniciante, Intermediario};
    match area {
        "Desenvolvimento" => vec![
            q(
                "dev-q1",
                Iniciante,
                "O que é uma variável em programação?",
                &[
                    "Um valor fixo que nunca muda",
                    "Um espaço na memória para guardar valores que podem mudar",
                    "Um arquivo de configuração do sistema",
                    "Um tipo especial de banco de dados",
                ],
                1,
                "Variáveis são espaços na memória usados para armazenar valores que podem mudar \
                 durante a execução do programa.",
            ),
            q(
                "dev-q2",
                Iniciante,
                "Qual destas opções é um exemplo de linguagem de programação?",
                &["HTML", "CSS", "JavaScript", "HTTP"],
                2,
                "JavaScript é uma linguagem de programação. HTML e CSS são linguagens de marcação \
                 e estilo, e HTTP é um protocolo.",
            ),
            q(
                "dev-q3",
                Intermediario,
                "O que é uma API REST?",
                &[
                    "Um tipo de banco de dados relacional",
                    "Um padrão para construir serviços web usando HTTP",
                    "Um servidor de arquivos",
                    "Uma ferramenta de design de telas",
                ],
                1,
                "APIs REST seguem um conjunto de princípios para expor recursos via HTTP, usando \
                 verbos como GET, POST, PUT e DELETE.",
            ),
            q(
                "dev-q4",
                Intermediario,
                "No React, o que é um componente?",
                &[
                    "Um arquivo CSS",
                    "Uma função ou classe que retorna elementos de interface",
                    "Um tipo de banco de dados",
                    "Uma variável global",
                ],
                1,
                "Componentes são blocos reutilizáveis de UI em React, geralmente implementados \
                 como funções que retornam JSX.",
            ),
            q(
                "dev-q5",
                Avancado,
                "Por que é importante lidar com estados assíncronos em aplicações web?",
                &[
                    "Porque o JavaScript não suporta operações síncronas",
                    "Porque quase tudo (requisições, timers) acontece em momentos diferentes no tempo",
                    "Para evitar o uso de variáveis",
                    "Para não precisar testar o código",
                ],
                1,
                "Em aplicações web, muitas operações são assíncronas (requisições HTTP, timers, \
                 eventos de usuário), e o estado precisa refletir essas mudanças de forma \
                 previsível.",
            ),
        ],
        "Dados" => vec![
            q(
                "data-q1",
                Iniciante,
                "Para que serve uma planilha (como Excel ou Google Sheets)?",
                &[
                    "Apenas para escrever textos longos",
                    "Para armazenar e organizar dados em linhas e colunas",
                    "Para compilar código",
                    "Para hospedar sites",
                ],
                1,
                "Planilhas são muito usadas para organizar dados em tabelas, fazer cálculos e \
                 criar gráficos simples.",
            ),
            q(
                "data-q2",
                Iniciante,
                "O que é SQL?",
                &[
                    "Uma biblioteca de Python",
                    "Uma linguagem para consultar e manipular dados em bancos relacionais",
                    "Um tipo de gráfico",
                    "Um editor de planilhas",
                ],
                1,
                "SQL (Structured Query Language) é a linguagem padrão para trabalhar com bancos \
                 de dados relacionais.",
            ),
            q(
                "data-q3",
                Intermediario,
                "O que significa 'limpar dados' em um projeto de análise de dados?",
                &[
                    "Apagar todos os registros antigos",
                    "Corrigir, padronizar e tratar valores faltantes ou inconsistentes",
                    "Converter tudo para texto",
                    "Tornar os dados confidenciais",
                ],
                1,
                "Limpeza de dados envolve tratar valores faltantes, remover duplicados e corrigir \
                 inconsistências para garantir qualidade nas análises.",
            ),
            q(
                "data-q4",
                Intermediario,
                "Qual é o objetivo principal de um dashboard em BI?",
                &[
                    "Armazenar dados brutos",
                    "Configurar servidores",
                    "Consolidar indicadores em uma visualização clara para tomada de decisão",
                    "Substituir apresentações em slides",
                ],
                2,
                "Dashboards reúnem indicadores e gráficos em uma visão única, facilitando a \
                 interpretação rápida de resultados e tendências.",
            ),
        ],
        "Design" => vec![
            q(
                "design-q1",
                Iniciante,
                "O que significa UX em design de produtos digitais?",
                &[
                    "User eXecution",
                    "User eXperience",
                    "Unified eXchange",
                    "Universal eXtension",
                ],
                1,
                "UX significa User Experience e está relacionado à experiência completa que a \
                 pessoa tem ao usar um produto ou serviço.",
            ),
            q(
                "design-q2",
                Iniciante,
                "Qual ferramenta é comumente usada para prototipagem de interfaces?",
                &["Excel", "Figma", "Postman", "Jenkins"],
                1,
                "Figma é uma ferramenta popular para criação de interfaces, protótipos e sistemas \
                 de design.",
            ),
            q(
                "design-q3",
                Intermediario,
                "Por que acessibilidade é importante em interfaces digitais?",
                &[
                    "Apenas para cumprir leis",
                    "Para reduzir custos de desenvolvimento",
                    "Para garantir que pessoas com diferentes necessidades consigam usar o produto",
                    "Para deixar a interface mais colorida",
                ],
                2,
                "Acessibilidade garante que pessoas com diferentes limitações (visuais, motoras, \
                 cognitivas) consigam usar o produto com autonomia.",
            ),
        ],
        "Infraestrutura" => vec![
            q(
                "infra-q1",
                Iniciante,
                "O que é um container (como Docker)?",
                &[
                    "Um tipo de banco de dados",
                    "Um pacote isolado com aplicação e suas dependências",
                    "Um protocolo de rede",
                    "Um servidor físico",
                ],
                1,
                "Containers empacotam aplicação e dependências em um ambiente isolado e portátil, \
                 facilitando deploy e consistência.",
            ),
            q(
                "infra-q2",
                Intermediario,
                "O que significa CI/CD?",
                &[
                    "Continuous Integration / Continuous Delivery",
                    "Cloud Integration / Cloud Database",
                    "Central Interface / Core Design",
                    "Code Injection / Code Destruction",
                ],
                0,
                "CI/CD é um conjunto de práticas para integrar código continuamente e automatizar \
                 entregas e deploy.",
            ),
            q(
                "infra-q3",
                Intermediario,
                "Por que monitorar serviços em produção é essencial?",
                &[
                    "Para aumentar o consumo de CPU",
                    "Para detectar problemas rapidamente e agir antes do usuário ser afetado",
                    "Apenas para gerar relatórios mensais",
                    "Porque garante que o código nunca terá bugs",
                ],
                1,
                "Monitorar serviços permite identificar falhas, lentidão ou uso excessivo de \
                 recursos antes que impactem os usuários.",
            ),
        ],
        _ => vec![
            q(
                "base-q1",
                Iniciante,
                "O que é aprender de forma contínua (lifelong learning)?",
                &[
                    "Estudar somente na época da escola",
                    "Buscar novos conhecimentos ao longo de toda a carreira",
                    "Aprender apenas quando a empresa exige",
                    "Focar só em cursos longos e formais",
                ],
                1,
                "Aprendizado contínuo significa manter o hábito de aprender ao longo da vida, \
                 acompanhando mudanças do mercado e da tecnologia.",
            ),
            q(
                "base-q2",
                Iniciante,
                "Qual é uma boa prática para consolidar um novo conhecimento?",
                &[
                    "Apenas assistir vídeos",
                    "Repetir o conteúdo sem aplicar",
                    "Colocar em prática em pequenos projetos ou exercícios",
                    "Evitar falar sobre o tema com outras pessoas",
                ],
                2,
                "Aplicar o que você aprendeu em pequenos projetos ou exercícios ajuda o cérebro a \
                 fixar melhor o conteúdo.",
            ),
        ],
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuizStats {
    pub correct: u32,
    pub wrong: u32,
}

/// A bounded walk over the three difficulty levels: a correct answer moves
/// one level up (clamped), a wrong one moves one level down (clamped). When
/// the target bucket is exhausted the current level is tried instead; when a
/// clamp means "stay", only the current bucket is tried. No question
/// available ends the session.
#[derive(Debug)]
pub struct QuizSession {
    by_level: [VecDeque<Question>; Level::COUNT],
    current: Option<Question>,
    answered: bool,
    last_correct: Option<bool>,
    stats: QuizStats,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let mut by_level: [VecDeque<Question>; Level::COUNT] = Default::default();
        for question in questions {
            by_level[question.nivel.index()].push_back(question);
        }
        let current = by_level.iter_mut().find_map(VecDeque::pop_front);
        QuizSession {
            by_level,
            current,
            answered: false,
            last_correct: None,
            stats: QuizStats::default(),
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn stats(&self) -> QuizStats {
        self.stats
    }

    pub fn is_over(&self) -> bool {
        self.current.is_none()
    }

    /// Grades the chosen alternative. Repeated calls for the same question
    /// return the first verdict without recounting.
    pub fn answer(&mut self, choice_index: usize) -> Option<bool> {
        let current = self.current.as_ref()?;
        if self.answered {
            return self.last_correct;
        }
        let correct = choice_index == current.correta_index;
        self.answered = true;
        self.last_correct = Some(correct);
        if correct {
            self.stats.correct += 1;
        } else {
            self.stats.wrong += 1;
        }
        Some(correct)
    }

    /// Moves to the next question according to the last verdict. A no-op
    /// until the current question is answered.
    pub fn advance(&mut self) -> Option<&Question> {
        if self.answered {
            let finished = self.current.take();
            let correct = self.last_correct.unwrap_or(false);
            self.answered = false;
            self.last_correct = None;

            if let Some(previous) = finished {
                let level = previous.nivel.index();
                let target = if correct {
                    (level + 1).min(Level::COUNT - 1)
                } else {
                    level.saturating_sub(1)
                };
                let stay = [target];
                let moved = [target, level];
                let candidates: &[usize] = if target == level { &stay } else { &moved };
                for &candidate in candidates {
                    if let Some(next) = self.by_level[candidate].pop_front() {
                        self.current = Some(next);
                        break;
                    }
                }
            }
        }
        self.current.as_ref()
    }
}
