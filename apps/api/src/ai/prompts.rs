//! Prompt templates for the AI-proxy endpoints. All prompts instruct the
//! model to answer in PT-BR; the JSON-returning ones pin the exact shape the
//! handlers deserialize.

const EXTRACT_TEMPLATE: &str = "\
Você é um assistente de carreiras. Extraia do texto abaixo as informações do perfil.
Devolva APENAS um JSON válido com o formato:
{
  \"habilidadesTecnicas\": [\"lista de habilidades técnicas citadas\"],
  \"softSkills\": [\"lista de soft skills citadas\"],
  \"area\": \"Desenvolvimento|Dados|Design|Infraestrutura|Sistemas ou null\",
  \"tags\": [\"união das habilidades e soft skills, sem repetição\"]
}

Texto:
{text}";

const SUMMARY_TEMPLATE: &str = "\
Você é um assistente de carreiras. Dado o perfil JSON abaixo, gere:
- \"headline\": um título curto e marcante (máx. 60 caracteres)
- \"resumo\": de 1 a 2 frases com impacto, em PT-BR
- \"skillsSugeridas\": até 5 habilidades técnicas adicionais que façam sentido

Responda somente em JSON válido.

Perfil:
{profile}";

const LEARNING_PLAN_TEMPLATE: &str = "\
Você é um mentor de carreira focado em reskilling e upskilling.
Receberá um perfil em JSON e deve devolver APENAS um JSON válido com o seguinte formato:
{
  \"objetivo\": \"string\",
  \"areaAlvo\": \"string\",
  \"nivelAtual\": \"iniciante|intermediário|avançado\",
  \"trilha\": [
    {
      \"id\": \"string-curta\",
      \"titulo\": \"string\",
      \"tipo\": \"curso|vídeo|artigo|projeto|simulado\",
      \"duracaoHoras\": 0,
      \"foco\": \"string curta explicando o foco da etapa\",
      \"conteudo\": \"texto curto explicando de forma bem introdutória o assunto da etapa\"
    }
  ],
  \"observacoes\": [\"lista\", \"de\", \"insights\", \"curtos\"]
}

Regras:
- Sempre responda em PT-BR.
- Adapte a trilha para o objetivo e área do perfil.
- Use no máximo 6 etapas na trilha.

Perfil:
{profile}
Objetivo declarado: {objetivo}
Área alvo sugerida: {area}";

const MENTOR_TEMPLATE: &str = "\
Você é um mentor de carreira e estudos para profissionais em transição ou crescimento.
Ajude o usuário a estudar, tirar dúvidas e manter motivação, sempre em PT-BR, objetivo e didático.

Contexto do perfil (JSON):
{profile}

Contexto do plano de aprendizado (JSON, se houver):
{plano}

Mensagem do usuário:
{mensagem}

Responda em tom acolhedor, em até 3 parágrafos curtos, podendo sugerir exercícios práticos \
relacionados à trilha do plano.";

pub fn extract_prompt(text: &str) -> String {
    EXTRACT_TEMPLATE.replace("{text}", text)
}

pub fn summary_prompt(profile_json: &str) -> String {
    SUMMARY_TEMPLATE.replace("{profile}", profile_json)
}

pub fn learning_plan_prompt(profile_json: &str, objetivo: &str, area: &str) -> String {
    LEARNING_PLAN_TEMPLATE
        .replace("{profile}", profile_json)
        .replace("{objetivo}", objetivo)
        .replace("{area}", area)
}

pub fn mentor_prompt(profile_json: &str, plano_json: &str, mensagem: &str) -> String {
    MENTOR_TEMPLATE
        .replace("{profile}", profile_json)
        .replace("{plano}", plano_json)
        .replace("{mensagem}", mensagem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_filled() {
        let prompt = learning_plan_prompt("{\"nome\":\"Ana\"}", "Virar dev", "Desenvolvimento");
        assert!(prompt.contains("\"nome\":\"Ana\""));
        assert!(prompt.contains("Objetivo declarado: Virar dev"));
        assert!(prompt.contains("Área alvo sugerida: Desenvolvimento"));
        assert!(!prompt.contains("{objetivo}"));
    }

    #[test]
    fn test_mentor_prompt_carries_the_message() {
        let prompt = mentor_prompt("{}", "null", "Como estudar SQL?");
        assert!(prompt.contains("Como estudar SQL?"));
    }
}
