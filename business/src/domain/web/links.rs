use once_cell::sync::Lazy;
use regex::Regex;

/// Vendor domains never cited as third-party sources.
pub const EXCLUDED_DOMAINS: &[&str] = &[
    "jetbrains.com",
    "jetbrains.cn",
    "jetbrains.net",
    "intellij.com",
    "youtrack.jetbrains.com",
];

/// Documentation sites known to host trustworthy framework material.
pub const VALID_DOC_DOMAINS: &[&str] = &[
    "docs.oracle.com",
    "docs.jboss.org",
    "hibernate.org",
    "spring.io",
    "docs.spring.io",
    "baeldung.com",
    "stackoverflow.com",
    "jakarta.ee",
    "eclipse.org",
    "eclipse.dev",
    "apache.org",
    "github.com",
    "mkyong.com",
    "tutorialspoint.com",
    "geeksforgeeks.org",
    "javatpoint.com",
    "dzone.com",
    "vogella.com",
    "journaldev.com",
    "howtodoinjava.com",
    "micronaut.io",
    "docs.micronaut.io",
    "guides.micronaut.io",
    "quarkus.io",
    "openjfx.io",
    "junit.org",
    "testng.org",
    "projectlombok.org",
    "beanvalidation.org",
    "refactoring.guru",
    "jenkov.com",
    "micronaut-projects.github.io",
];

type Pages = &'static [(&'static str, &'static str)];

/// Manually checked pages per framework key. Order matters: the first matching key wins.
pub const FALLBACK_WEBPAGES: &[(&str, Pages)] = &[
    ("cdi", &[
        ("https://jakarta.ee/specifications/cdi/4.1/jakarta-cdi-spec-4.1", "Jakarta CDI Specification"),
        ("https://docs.jboss.org/weld/reference/latest/en-US/html/part4.html", "Weld CDI Reference"),
        ("https://www.baeldung.com/java-ee-cdi", "Baeldung Java EE CDI Tutorial"),
    ]),
    ("jpa", &[
        ("https://jakarta.ee/specifications/persistence/3.2/jakarta-persistence-spec-3.2", "Jakarta Persistence Specification"),
        ("https://docs.oracle.com/javaee/7/tutorial/persistence-intro.htm", "Oracle JPA Tutorial"),
        ("https://www.baeldung.com/learn-jpa-hibernate", "Baeldung JPA/Hibernate Guide"),
    ]),
    ("spring boot", &[
        ("https://docs.spring.io/spring-boot/documentation.html", "Spring Boot Documentation"),
        ("https://spring.io/guides", "Official Spring Guides"),
        ("https://www.baeldung.com/spring-boot", "Baeldung Spring Boot Tutorials"),
    ]),
    ("spring security", &[
        ("https://www.geeksforgeeks.org/advance-java/spring-security-annotations/", "Spring Security Annotations"),
        ("https://spring.io/guides/topicals/spring-security-architecture", "Spring Security Architecture"),
        ("https://www.baeldung.com/spring-security-method-security", "Baeldung Spring Security Tutorials"),
    ]),
    ("spring core", &[
        ("https://www.javacodegeeks.com/2019/05/spring-core-annotations.html", "Spring Core Annotations"),
        ("https://unsekhablecom.wordpress.com/2018/11/02/15-spring-core-annotation-examples/", "Spring Core Examples"),
        ("https://www.baeldung.com/spring-core-annotations", "Baeldung Spring Core Annotations"),
    ]),
    ("spring cloud stream", &[
        ("https://docs.spring.io/spring-cloud-stream/docs/Brooklyn.SR1/reference/htmlsingle/", "Spring Cloud Stream Reference"),
        ("https://developer.okta.com/blog/2020/04/15/spring-cloud-stream", "Spring Cloud Stream"),
        ("https://www.baeldung.com/spring-cloud-stream", "Baeldung Spring Cloud Stream"),
    ]),
    ("spring data", &[
        ("https://www.baeldung.com/spring-data-annotations", "Spring Data Annotations"),
        ("https://spring.io/projects/spring-data", "Spring Data Project"),
        ("https://www.baeldung.com/the-persistence-layer-with-spring-data-jpa", "Baeldung Spring Data JPA"),
    ]),
    ("spring integration", &[
        ("https://docs.spring.io/spring-integration/docs/current/reference/html/", "Spring Integration Reference"),
        ("https://www.spring-doc.cn/spring-integration/6.0.9/._overview.en.html", "Spring Integration Overview"),
        ("https://www.baeldung.com/spring-integration", "Baeldung Spring Integration"),
    ]),
    ("spring mvc", &[
        ("https://docs.spring.io/spring-framework/reference/web/webmvc.html", "Spring MVC Reference"),
        ("https://www.geeksforgeeks.org/advance-java/spring-mvc-annotations-with-examples/", "Spring MVC Annotations"),
        ("https://www.baeldung.com/spring-mvc-tutorial", "Baeldung Spring MVC Tutorial"),
    ]),
    ("spring modulith", &[
        ("https://docs.spring.io/spring-modulith/docs/current/api/org/springframework/modulith/events/ApplicationModuleListener.html", "Spring Modulith Reference"),
        ("https://spring.io/projects/spring-modulith", "Spring Modulith Project"),
        ("https://www.baeldung.com/spring-modulith", "Baeldung Spring Modulith"),
    ]),
    ("spring aop", &[
        ("https://docs.spring.io/spring-framework/reference/core/aop/ataspectj.html", "Spring AOP AspectJ"),
        ("https://www.geeksforgeeks.org/java/spring-aop-with-examples/", "Spring Guides"),
        ("https://mkyong.com/spring3/spring-aop-aspectj-annotation-example/", "Baeldung Spring AOP Tutorial"),
    ]),
    ("jax-rs", &[
        ("https://jakarta.ee/specifications/restful-ws/4.0/jakarta-restful-ws-spec-4.0", "Jakarta RESTful Web Services Specification"),
        ("https://docs.oracle.com/javaee/7/tutorial/jaxrs003.htm#GIPZZ", "Oracle JAX-RS Tutorial"),
        ("https://www.baeldung.com/rest-with-spring-series", "Baeldung REST with Spring"),
    ]),
    ("hibernate", &[
        ("https://hibernate.org/orm/documentation/", "Hibernate ORM Documentation"),
        ("https://docs.jboss.org/hibernate/orm/current/userguide/html_single/Hibernate_User_Guide.html", "Hibernate User Guide"),
        ("https://www.baeldung.com/learn-jpa-hibernate", "Baeldung Hibernate Tutorial"),
    ]),
    ("aop", &[
        ("https://eclipse.dev/aspectj/doc/released/progguide/index.html", "AspectJ Programming Guide 1998-2001"),
        ("https://docs.spring.io/spring-framework/reference/core/aop/schema.html", "Spring AOP Schema"),
        ("https://www.baeldung.com/aspectj", "Baeldung AspectJ Tutorial"),
    ]),
    ("javadoc", &[
        ("https://docs.oracle.com/javase/8/docs/technotes/tools/windows/javadoc.html", "Oracle Javadoc Tool"),
        ("https://www.oracle.com/technical-resources/articles/java/javadoc-tool.html", "How to Write Doc Comments"),
        ("https://www.baeldung.com/javadoc", "Baeldung Javadoc Guide"),
    ]),
    ("java ee", &[
        ("https://jakarta.ee/specifications/servlet/5.0/apidocs/", "Jakarta EE Specifications"),
        ("https://docs.oracle.com/javaee/7/tutorial/", "Oracle Java EE 7 Tutorial"),
        ("https://jakarta.ee/specifications/annotations/3.0/", "Baeldung Java EE Tutorials"),
    ]),
    ("validation", &[
        ("https://beanvalidation.org/2.0/spec/", "Bean Validation 2.0 Specification"),
        ("https://docs.spring.io/spring-framework/reference/core/validation/beanvalidation.html", "Spring Bean Validation"),
        ("https://www.baeldung.com/javax-validation", "Baeldung Bean Validation Tutorial"),
    ]),
    ("micronaut", &[
        ("https://docs.micronaut.io/latest/guide/", "Micronaut Core Documentation"),
        ("https://guides.micronaut.io/", "Micronaut Guides"),
        ("https://www.baeldung.com/micronaut", "Baeldung Micronaut Tutorial"),
    ]),
    ("micronaut data", &[
        ("https://micronaut-projects.github.io/micronaut-data/latest/guide/", "Micronaut Data Documentation"),
        ("https://docs.micronaut.io/4.9.5/api/io/micronaut/http/annotation/PathVariable.html", "Micronaut Data Guides"),
        ("https://dev.to/dixitgurv/microservices-design-patterns-in-java-3pfk", "Microservices Design Patterns"),
    ]),
    ("quarkus", &[
        ("https://quarkus.io/guides/config-reference", "Quarkus Guides"),
        ("https://quarkus.io/guides/rest-client", "Quarkus Documentation"),
        ("https://www.baeldung.com/quarkus-io", "Baeldung Quarkus Tutorial"),
    ]),
    ("javafx", &[
        ("https://docs.oracle.com/javafx/2/get_started/jfxpub-get_started.htm", "Oracle JavaFX Get Started"),
        ("https://www.jenkov.com/tutorials/javafx/index.html", "Jenkov JavaFX Tutorials"),
        ("https://www.jenkov.com/tutorials/javafx/fxml.html", "JavaFX FXML"),
    ]),
    ("junit", &[
        ("https://junit.org/junit5/docs/current/user-guide/", "JUnit 5 User Guide"),
        ("https://www.baeldung.com/junit-5", "Baeldung JUnit 5 Guide"),
        ("https://docs.junit.org/6.0.0-RC1/user-guide/index.html", "JUnit 6 User Guide"),
    ]),
    ("java-verbose", &[
        ("https://www.baeldung.com/java-clean-code", "Baeldung Clean Code"),
        ("https://refactoring.guru/refactoring/catalog", "Refactoring Catalog"),
        ("https://dzone.com/articles/introduction-to-lombok", "Introduction to Lombok"),
    ]),
    ("lombok", &[
        ("https://projectlombok.org/features/", "Project Lombok Features"),
        ("https://www.baeldung.com/intro-to-project-lombok", "Baeldung Lombok Introduction"),
        ("https://projectlombok.org/features/", "Project Lombok Features"),
    ]),
    ("serialization", &[
        ("https://stackoverflow.com/questions/63783474/what-is-the-use-of-serial-annotation-as-of-java-14", "What is the use of serial annotation as of Java 14?"),
        ("https://www.baeldung.com/java-14-serial-annotation", "Baeldung Java 14 Serial Annotation"),
        ("https://dzone.com/articles/javas-serial-annotation", "Java Serial Annotation"),
    ]),
    ("testng", &[
        ("https://testng.org/", "TestNG Documentation"),
        ("https://www.baeldung.com/testng", "Baeldung TestNG Tutorial"),
        ("https://www.tutorialspoint.com/testng/testng_quick_guide.htm", "TestNG Quick Guide"),
    ]),
];

static URL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r#"https?://[^\s)\]}>"',]+"#).ok());

const URL_TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

pub fn is_excluded(text: &str) -> bool {
    let lowered = text.to_lowercase();
    EXCLUDED_DOMAINS.iter().any(|domain| lowered.contains(domain))
}

pub fn is_known_doc_domain(url: &str) -> bool {
    let lowered = url.to_lowercase();
    VALID_DOC_DOMAINS.iter().any(|domain| lowered.contains(domain))
}

/// Drops every line that mentions an excluded domain.
pub fn filter_excluded_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !is_excluded(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Finds every http(s) URL in free text, without trailing punctuation.
pub fn extract_urls(text: &str) -> Vec<String> {
    let Some(pattern) = URL_PATTERN.as_ref() else {
        return Vec::new();
    };
    pattern
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(URL_TRAILING_PUNCTUATION).to_string())
        .collect()
}

/// Curated pages for a framework, numbered, used when the web search fails.
pub fn fallback_pages(framework: &str) -> String {
    let framework = if framework.is_empty() {
        "java".to_string()
    } else {
        framework.to_lowercase()
    };

    let matched = FALLBACK_WEBPAGES
        .iter()
        .find(|(key, _)| framework.contains(key) || key.contains(framework.as_str()));

    if let Some((_, pages)) = matched {
        return pages
            .iter()
            .take(2)
            .enumerate()
            .map(|(index, (url, title))| format!("{}. {} - {}", index + 1, url, title))
            .collect::<Vec<_>>()
            .join("\n");
    }

    format!(
        "[FBO] 1. https://docs.oracle.com/javaee/7/tutorial/ - Java EE Tutorial\n2. https://stackoverflow.com/questions/tagged/{}",
        framework.replace(' ', "-")
    )
}
