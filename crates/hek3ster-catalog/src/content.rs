//! The compiled-in landing page content.
//!
//! Order matters for steps, comparison rows and cluster spec rows: it is the
//! display order.

use crate::model::{
    ArchitectureLayout, CapabilityItem, ClusterSpecRow, ComparisonCell, ComparisonRow,
    ExternalLink, FeatureItem, HeroStat, PlanFeature, PricingPlan, Step, TrustNote,
};

use crate::model::ComparisonCell as C;

pub const REPOSITORY_URL: &str = "https://github.com/magenx/hek3ster";

pub static HERO_STATS: &[HeroStat] = &[
    HeroStat {
        value: "AI Manager",
        label: "Intelligent Interface",
    },
    HeroStat {
        value: "Security First",
        label: "Air-gapped Environment",
    },
    HeroStat {
        value: "85% Savings",
        label: "Compared to Others",
    },
];

pub static HERO_LINKS: &[ExternalLink] = &[
    ExternalLink {
        label: "Read the Docs",
        href: "https://github.com/magenx/hek3ster/wiki",
        new_tab: false,
    },
    ExternalLink {
        label: "View on GitHub",
        href: REPOSITORY_URL,
        new_tab: true,
    },
];

pub static TRUST_NOTES: &[TrustNote] = &[TrustNote {
    label: "An independent open source project, not affiliated with Hetzner Online GmbH.",
}];

pub static ARCHITECTURE: ArchitectureLayout = ArchitectureLayout {
    control_plane_nodes: 3,
    worker_nodes: 3,
    legend: &[
        "Control Plane",
        "Worker Nodes",
        "API Load Balancer",
        "NAT Gateway",
        "Inbound Traffic",
        "Internal / Outbound",
    ],
};

pub static FEATURES: &[FeatureItem] = &[
    FeatureItem {
        title: "Unmatched Velocity",
        description: "K3s HA cluster management tool written in Go, providing creation, management, and operations.",
        highlights: &[
            "Hetzner Cloud Go SDK v2",
            "Binary starts in 10ms",
            "Full rebuild in 15 seconds",
            "Zero runtime dependencies",
            "Unit and integration tests",
        ],
    },
    FeatureItem {
        title: "Uncomplicated Excellence",
        description: "Complete tool, one YAML config file. No programming or Kubernetes skills are required. All infra pre-installed.",
        highlights: &[
            "AI Cluster Manager",
            "NAT Gateway for access",
            "Global and API load balancers",
            "S3 backups for etcd",
            "Automated upgrade plan generation",
        ],
    },
    FeatureItem {
        title: "Uncompromised Security",
        description: "Core architectural principle - security first. It is essential foundation built into every layer of this tool.",
        highlights: &[
            "Private network by default",
            "Automated firewall configuration",
            "Tokens and ssh keys on your PC",
            "SSL/TLS encrypting data sent between",
            "Interconnected and hermetically sealed",
        ],
    },
];

pub static CAPABILITIES: &[CapabilityItem] = &[
    CapabilityItem {
        title: "kubectl",
        description: "Command line tool for communicating with a Kubernetes cluster's control plane.",
    },
    CapabilityItem {
        title: "helm",
        description: "Helm helps you define, install, and upgrade even the most complex Kubernetes applications.",
    },
    CapabilityItem {
        title: "kubectl-ai",
        description: "Translating user intent into precise Kubernetes operations, making management more accessible and efficient.",
    },
    CapabilityItem {
        title: "k3s",
        description: "Lightweight, certified Kubernetes distribution by Rancher. Lower resource footprint, single binary, production-ready.",
    },
    CapabilityItem {
        title: "Hetzner Cloud Controller Manager",
        description: "Automatic load balancer provisioning and node lifecycle management integrated with Hetzner Cloud.",
    },
    CapabilityItem {
        title: "Hetzner CSI Driver",
        description: "Dynamic volume provisioning for Hetzner Cloud volumes. Create PVCs and get automatically provisioned storage.",
    },
    CapabilityItem {
        title: "Cluster Autoscaler",
        description: "Automatically adjust the number of nodes based on pending pods and resource utilization.",
    },
    CapabilityItem {
        title: "System Upgrade Controller",
        description: "Declarative upgrades for k3s. Define the target version and let the controller handle rolling updates.",
    },
    CapabilityItem {
        title: "Flannel",
        description: "Choose your CNI: Flannel for simplicity or Cilium for advanced features like eBPF and network policies.",
    },
];

const fn row(factor: &'static str, cells: [ComparisonCell; 4]) -> ComparisonRow {
    ComparisonRow { factor, cells }
}

pub static COMPARISON: &[ComparisonRow] = &[
    row(
        "Setup time",
        [
            C::good("~5 minutes"),
            C::good("~5 minutes"),
            C::bad("30+ minutes"),
            C::bad("30+ minutes"),
        ],
    ),
    row(
        "Dependencies",
        [
            C::good("CLI tool only"),
            C::bad("helm, kubectl, homebrew"),
            C::bad("Third-party account*"),
            C::bad("Terraform, Packer, helm, kubectl"),
        ],
    ),
    row(
        "Data privacy",
        [
            C::good("Full control"),
            C::good("Full control"),
            C::bad("Third-party access"),
            C::bad("Platform dependent"),
        ],
    ),
    row(
        "Monthly cost",
        [
            C::good("Infrastructure"),
            C::good("Infrastructure"),
            C::bad("Infra + platform fees"),
            C::bad("Infra + platform fees"),
        ],
    ),
    row(
        "Credential exposure",
        [
            C::good("None"),
            C::good("None"),
            C::bad("API tokens"),
            C::bad("Setup dependent"),
        ],
    ),
    row(
        "Learning curve",
        [
            C::good("Low"),
            C::good("Low"),
            C::bad("Medium"),
            C::bad("Medium-High"),
        ],
    ),
    row(
        "Secure by default",
        [
            C::good("Yes"),
            C::bad("Manual setup"),
            C::bad("Varies"),
            C::bad("Manual setup"),
        ],
    ),
    row(
        "Private network",
        [
            C::good("Yes"),
            C::bad("Manual config"),
            C::bad("Manual config"),
            C::bad("Manual config"),
        ],
    ),
    row(
        "Public IP exposure",
        [
            C::good("No public IPs"),
            C::bad("Public by default"),
            C::bad("Public by default"),
            C::bad("Public by default"),
        ],
    ),
    row(
        "NAT gateway",
        [
            C::good("Included"),
            C::bad("Manual setup"),
            C::bad("Manual setup"),
            C::bad("Manual setup"),
        ],
    ),
    row(
        "Global load balancer",
        [
            C::good("Included"),
            C::bad("Manual setup"),
            C::bad("Manual setup"),
            C::bad("Manual setup"),
        ],
    ),
    row(
        "Configuration",
        [
            C::good("AI"),
            C::bad("Manual setup + YAML"),
            C::bad("Web UI / API"),
            C::bad("HCL files"),
        ],
    ),
];

/// Footnote printed under the comparison table.
pub const COMPARISON_FOOTNOTE: &str =
    "*Managed services require signing up for their platform in addition to Hetzner Cloud.";

const fn included(text: &'static str) -> PlanFeature {
    PlanFeature {
        text,
        included: true,
    }
}

const fn excluded(text: &'static str) -> PlanFeature {
    PlanFeature {
        text,
        included: false,
    }
}

pub static PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "hek3ster + Hetzner Cloud",
        badge: "Best Value",
        price: "$158",
        subtitle: "Infrastructure only \u{2014} 3 masters + 10 workers",
        features: &[
            included("hek3ster is 100% free"),
            included("Pay only for Hetzner servers"),
            included("No management platform fees"),
            included("Traffic & DDoS protection included"),
            included("Full infrastructure control"),
        ],
        highlighted: true,
    },
    PricingPlan {
        name: "AWS EKS",
        badge: "10x More",
        price: "$1,595+",
        subtitle: "Same cluster size, different cloud",
        features: &[
            excluded("$73/month control plane fee"),
            excluded("~$1,440/month for 10 EC2 instances"),
            excluded("~$81/month for Network Load Balancer"),
            excluded("+ data transfer, EBS"),
            excluded("Complex pricing model"),
        ],
        highlighted: false,
    },
    PricingPlan {
        name: "Managed Platform on Hetzner",
        badge: "2x More",
        price: "$368+",
        subtitle: "Same infrastructure + platform fees",
        features: &[
            excluded("Per-vCPU management fees"),
            excluded("Control plane fee (Pro tier)"),
            excluded("Third-party account required"),
            excluded("API token shared with platform"),
        ],
        highlighted: false,
    },
];

pub static CLUSTER_SPECS: &[ClusterSpecRow] = &[
    ClusterSpecRow {
        kind: "Language",
        config: "GO 1.25",
        description: "Modern, efficient, compiled language",
    },
    ClusterSpecRow {
        kind: "Startup Time",
        config: "~10ms",
        description: "Instant binary startup",
    },
    ClusterSpecRow {
        kind: "Binary Size",
        config: "~12MB",
        description: "Compact single executable",
    },
    ClusterSpecRow {
        kind: "Build Time",
        config: "~15sec",
        description: "Fast development iteration",
    },
    ClusterSpecRow {
        kind: "Dependencies",
        config: "Static binary",
        description: "Zero runtime dependencies",
    },
    ClusterSpecRow {
        kind: "Test Coverage",
        config: "Comprehensive",
        description: "Unit and integration tests included",
    },
    ClusterSpecRow {
        kind: "Configuration",
        config: "YAML",
        description: "Full syntax support",
    },
];

pub static STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Install hek3ster",
        description: "Download the binary for your platform",
        code: INSTALL_SNIPPET,
    },
    Step {
        number: 2,
        title: "Create Configuration",
        description: "Define your cluster in a simple YAML file",
        code: CLUSTER_YAML,
    },
    Step {
        number: 3,
        title: "Create Your Cluster",
        description: "One command to deploy everything",
        code: CREATE_SNIPPET,
    },
];

pub static FOOTER_LINKS: &[ExternalLink] = &[
    ExternalLink {
        label: "Read the Docs",
        href: "https://deepwiki.com/magenx/hek3ster",
        new_tab: false,
    },
    ExternalLink {
        label: "Join Discussions",
        href: "https://github.com/magenx/hek3ster/discussions",
        new_tab: true,
    },
];

const INSTALL_SNIPPET: &str = "# macOS arm64 / Linux (arm64/amd64)
https://github.com/magenx/hek3ster/releases";

const CREATE_SNIPPET: &str = r#"# Generate SSH key pair
ssh-keygen -t ed25519 -f ~/.ssh/id_ed25519 -C "your@example.com"

# Create Your Cluster
hek3ster create --config cluster.yaml

# That's it! Your cluster is ready.
kubectl get nodes"#;

const CLUSTER_YAML: &str = r##"# cluster.yaml
---
hetzner_token: xxxx
cluster_name: &cluster_name demo
kubeconfig_path: "~/.kube/config"
k3s_version: v1.35.0+k3s1

domain: &domain example.com
location: &location nbg1
image: &image debian-13
autoscaling_image: *image

protect_against_deletion: true
create_load_balancer_for_the_kubernetes_api: true
k3s_upgrade_concurrency: 1
schedule_workloads_on_masters: false

datastore:
  mode: "etcd"
  embedded_etcd:
    snapshot_retention: 24
    snapshot_schedule_cron: "0 * * * *"
    s3_enabled: true
    s3_endpoint: "nbg1.your-objectstorage.com"
    s3_region: *location
    s3_bucket: *cluster_name
    s3_folder: "etcd-snapshot"
    s3_access_key: "xxxx"
    s3_secret_key: "xxxx"

networking:
  ssh:
    port: 22
    use_agent: false
    public_key_path: "~/.ssh/id_ed25519.pub"
    private_key_path: "~/.ssh/id_ed25519"

  allowed_networks:
    ssh:
      - 123.10.45.34/32
      - 72.40.0.0/16
    api:
      - 123.10.45.34/32
      - 72.40.0.0/16
      - 33.79.45.65/32
      
# Public network disabled
  public_network:
    use_local_firewall: false
    ipv4:
      enabled: false
    ipv6:
      enabled: false

# Private network only with NAT gateway
  private_network:
    enabled: true
    subnet: 10.0.0.0/16
    existing_network_name: ""
    nat_gateway:
      enabled: true
      instance_type: "cx23"
      location: *location

  cni:
    enabled: true
    mode: flannel
    encryption: true
    flannel:
      encryption: true
      disable_kube_proxy: false
      
# Global Load Balancer Configuration
# This load balancer will serve public traffic for your applications
load_balancer:
  # Optional: Custom name for the load balancer
  # If not specified, defaults to "{cluster_name}-global-lb"
  # name: *cluster_name
  enabled: true
  target_pools: ["varnish"]
  use_private_ip: true
  attach_to_network: true
  type: "lb11"
  location: *location
  algorithm:
    type: "round_robin"
  services:
    - protocol: "http"
      listen_port: 80
      destination_port: 80
      proxyprotocol: false
      health_check:
        protocol: "http"
        port: 80
        interval: 15
        timeout: 10
        retries: 3
        http:
          domain: *domain
          path: "/health_check.php"
          status_codes: ["2??", "3??"]
          tls: false

masters_pool:
  instance_type: cpx22
  instance_count: 2
  locations:
    - *location

worker_node_pools:
- name: varnish
  instance_type: cpx22
  instance_count: 1
  location: *location
 
- name: nginx
  instance_type: cpx22
  instance_count: 1
  location: *location

- name: php
  instance_type: cpx22
  location: *location
  autoscaling:
    enabled: true
    min_instances: 1
    max_instances: 3

- name: valkey
  instance_type: cpx22
  instance_count: 1
  location: *location

- name: rabbitmq
  instance_type: cpx22
  instance_count: 1
  location: *location
  
- name: opensearch
  instance_type: cpx22
  instance_count: 1
  location: *location

- name: mariadb
  instance_type: cpx22
  instance_count: 1
  location: *location

addons:
  metrics_server:
    enabled: true
  csi_driver:
    enabled: true
    manifest_url: "https://raw.githubusercontent.com/hetznercloud/csi-driver/
    v2.18.3/deploy/kubernetes/hcloud-csi.yml"
  cluster_autoscaler:
    enabled: true
    manifest_url: "https://raw.githubusercontent.com/kubernetes/autoscaler/master/
    cluster-autoscaler/cloudprovider/hetzner/examples/cluster-autoscaler-run-on-master.yaml"
    container_image_tag: "v1.34.2"
    scan_interval: "10s"                        
    scale_down_delay_after_add: "10m"
    scale_down_delay_after_delete: "10s"
    scale_down_delay_after_failure: "3m"
    max_node_provision_time: "5m"
  cloud_controller_manager:
    enabled: true
    manifest_url: "https://github.com/hetznercloud/
    hcloud-cloud-controller-manager/releases/download/v1.28.0/ccm-networks.yaml"
  system_upgrade_controller:
    enabled: true
    deployment_manifest_url: "https://github.com/rancher/
    system-upgrade-controller/releases/download/v0.18.0/system-upgrade-controller.yaml"
    crd_manifest_url: "https://github.com/rancher/
    system-upgrade-controller/releases/download/v0.18.0/crd.yaml"
  embedded_registry_mirror:
    enabled: true 

additional_packages:
  - ufw

additional_pre_k3s_commands:
  - apt autoremove -y hc-utils
  - apt purge -y hc-utils
  - echo "auto enp7s0" > /etc/network/interfaces
  - echo "iface enp7s0 inet dhcp" >> /etc/network/interfaces
  - echo "    post-up ip route add default via 10.0.0.1"  >> /etc/network/interfaces
  - echo "[Resolve]" > /etc/systemd/resolved.conf
  - echo "DNS=185.12.64.2 185.12.64.1" >> /etc/systemd/resolved.conf
  - ifdown enp7s0 2>/dev/null || true
  - ifup enp7s0 2>/dev/null || true
  - sleep 2
  - apt update
  - apt install -y resolvconf syslog-ng
  - systemctl enable --now resolvconf
  - echo "nameserver 185.12.64.2" >> /etc/resolvconf/resolv.conf.d/head
  - echo "nameserver 185.12.64.1" >> /etc/resolvconf/resolv.conf.d/head
  - resolvconf --enable-updates
  - resolvconf -u

additional_post_k3s_commands:
  - apt autoremove -y"##;
